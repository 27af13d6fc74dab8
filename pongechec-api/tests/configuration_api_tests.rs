//! In-Process API Surface Tests
//!
//! These drive the fully assembled router through `tower::ServiceExt::oneshot`
//! without a live database: pool connections are lazy, and every path
//! exercised here returns before storage is touched.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use pongechec_api::{create_api_router, DbClient, DbConfig, ErrorBody};

// ============================================================================
// TEST SUPPORT
// ============================================================================

fn test_app() -> Router {
    let db = DbClient::from_config(&DbConfig::default()).expect("pool creation is lazy");
    create_api_router(db)
}

async fn read_error_body(response: Response) -> ErrorBody {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("error body JSON")
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN.as_str()], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS.as_str()],
        "GET, POST, PUT, DELETE, OPTIONS, HEAD"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS.as_str()],
        "Origin, Content-Type, Accept, Authorization"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS.as_str()],
        "true"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE.as_str()], "86400");
}

// ============================================================================
// VALIDATION
// ============================================================================

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let response = test_app()
        .oneshot(json_request("POST", "/api/configurations", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_error_body(response).await;
    assert_eq!(body.error, "Name is required");
}

#[tokio::test]
async fn test_create_with_blank_name_is_rejected() {
    let response = test_app()
        .oneshot(json_request("POST", "/api/configurations", r#"{"name": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_error_body(response).await;
    assert_eq!(body.error, "Name is required");
}

#[tokio::test]
async fn test_create_with_malformed_json_is_a_client_error() {
    let response = test_app()
        .oneshot(json_request("POST", "/api/configurations", "{not json"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_non_numeric_id_is_a_client_error() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/configurations/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_headers_on_success() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cors_headers_on_unmatched_route() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/no/such/route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cors_headers_on_method_not_allowed() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/configurations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cors_headers_on_preflight() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/configurations")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_cors_headers(&response);
}

#[tokio::test]
async fn test_cors_headers_on_validation_error() {
    let response = test_app()
        .oneshot(json_request("POST", "/api/configurations", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(&response);
}

// ============================================================================
// OPENAPI
// ============================================================================

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/configurations"].is_object());
}
