mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use qr_badge::routes::app_router;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let app = app_router(common::create_test_state(), "static");

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

#[tokio::test]
async fn test_router_serves_qr_under_api() {
    let (status, headers, body) = get("/api/qr?value=example.com&size=128").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    let image = image::load_from_memory(&body).unwrap();
    assert_eq!((image.width(), image.height()), (128, 128));
}

#[tokio::test]
async fn test_router_trims_trailing_slash() {
    let (status, _, _) = get("/api/qr/?value=x").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = get("/health/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_router_serves_page_and_static_assets() {
    let (status, _, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("/static/qr.js"));

    let (status, _, body) = get("/static/qr.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("/api/qr?"));
}

#[tokio::test]
async fn test_router_unknown_path() {
    let (status, _, _) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
