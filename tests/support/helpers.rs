// tests/support/helpers.rs
use super::mocks;
use article_service::application::{
    mappers::DefaultArticleMapper,
    ports::{mapper::ArticleMapper, time::Clock},
    services::{ApplicationServices, ArticleService},
};
use article_service::domain::article::ArticleRepository;
use article_service::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;

pub fn build_services(
    repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
) -> Arc<ApplicationServices> {
    let mapper: Arc<dyn ArticleMapper> = Arc::new(DefaultArticleMapper);
    Arc::new(ApplicationServices::new(repo, mapper, clock))
}

/// Article service over `repo` with a clock that ticks one second per call.
pub fn article_service(repo: Arc<dyn ArticleRepository>) -> Arc<ArticleService> {
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::default());
    Arc::clone(&build_services(repo, clock).articles)
}

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::default());
    HttpState {
        services: build_services(repo, clock),
        default_page_size: 50,
    }
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo), &["*".to_string()])
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
