//! Smoke tests for the application surface outside `/api`.

use axum::body::Body;
use axum::http::{Request, StatusCode};

use clientele_integration_tests::{TestApp, read_text};

#[tokio::test]
async fn test_health_reports_ok() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_confirms_the_database() {
    let app = TestApp::spawn().await;

    let response = app.get("/health/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_preflight_is_open_to_any_origin() {
    let app = TestApp::spawn().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/customers")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .expect("request");
    let response = app.request(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("CORS header present");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn test_browser_requests_get_cors_headers() {
    let app = TestApp::spawn().await;

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .expect("request");
    let response = app.request(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("CORS header present");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn test_unknown_routes_fall_through_to_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/unknown?userId=agent-1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
