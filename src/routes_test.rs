use super::*;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

async fn get_path(router: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn healthz_reports_ok_json() {
    let (status, body) = get_path(base_routes(&manifest_dir()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "bluenexus");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn pkg_serves_files_from_bundle_dir() {
    let (status, body) = get_path(base_routes(&manifest_dir()), "/pkg/Cargo.toml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("name = \"bluenexus\""));
}

#[tokio::test]
async fn missing_bundle_asset_is_not_found() {
    let (status, _) = get_path(base_routes(&manifest_dir()), "/pkg/bluenexus_bg.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get_path(base_routes(&manifest_dir()), "/api/v1/biodiversity/species").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn server_error_wraps_config_error() {
    let err: ServerError = ConfigError::InvalidPort("x".into()).into();
    assert_eq!(err.to_string(), "invalid PORT 'x': expected an integer in 1..=65535");
}
