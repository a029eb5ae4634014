use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let resp = api_routes().oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_allows_cross_origin_callers() {
    let req = Request::builder()
        .uri("/healthz")
        .header("origin", "http://example.test")
        .body(Body::empty())
        .unwrap();
    let resp = api_routes().oneshot(req).await.unwrap();
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let resp = api_routes().oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_dir_serves_files() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
    let resp = public_files(&dir).oneshot(get_request("/robots.txt")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_dir_misses_are_not_found() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
    let resp = public_files(&dir).oneshot(get_request("/missing.png")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
