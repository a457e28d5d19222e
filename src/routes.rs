//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the Leptos shell,
//! serves the compiled WASM/CSS bundle under `/pkg`, and answers `/healthz`
//! for process supervisors.

use std::path::{Path, PathBuf};

use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Full application router: SSR shell + static bundle + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(bluenexus_client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root.display(), routes = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || bluenexus_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    Ok(base_routes(&site_root.join(leptos_options.site_pkg_dir.as_ref()))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Routes that do not depend on Leptos: health check and the `/pkg` bundle.
pub fn base_routes(pkg_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", service: "bluenexus", version: env!("CARGO_PKG_VERSION") })
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
