// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use project_board::application::commands::users::RegisterUserCommand;
use project_board::application::ports::ClockPort;
use project_board::application::services::ApplicationServices;
use project_board::infrastructure::repositories::MemoryBoardStore;
use project_board::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::FixedClock;

/// インメモリストアと固定時計でサービス一式を組み立てる
pub fn build_services_with_clock(
    clock: Arc<ClockPort>,
) -> (Arc<ApplicationServices>, MemoryBoardStore) {
    let store = MemoryBoardStore::new();
    let services = Arc::new(ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        clock,
    ));
    (services, store)
}

pub fn build_services() -> (Arc<ApplicationServices>, MemoryBoardStore) {
    build_services_with_clock(Arc::new(FixedClock))
}

pub fn build_test_state() -> HttpState {
    let (services, _) = build_services();
    HttpState { services }
}

pub fn make_test_router() -> Router {
    build_router(build_test_state(), &[])
}

/// ハンドル `handle` のユーザーを登録する
pub async fn register(services: &ApplicationServices, handle: &str, nickname: Option<&str>) {
    services
        .user_commands
        .register(RegisterUserCommand {
            handle: handle.into(),
            nickname: nickname.map(str::to_owned),
        })
        .await
        .expect("register test user");
}

pub fn json_request(method: &str, uri: &str, actor: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(actor) = actor {
        builder = builder.header("x-user-id", actor);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: &str, uri: &str, actor: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor) = actor {
        builder = builder.header("x-user-id", actor);
    }
    builder.body(Body::empty()).expect("build request")
}

/// リクエストを送ってステータスと JSON ボディを返す（ボディが空なら Null）
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.expect("router response");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "expected json body, got: {}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
