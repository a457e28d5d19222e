mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), routes::ServerError> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(addr = %config.bind_addr(), "blue nexus listening");
    axum::serve(listener, app).await?;
    Ok(())
}
