use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use roster_staff::router::build_router;
use roster_staff::state::AppState;

/// Router over a disconnected database: every storage call fails.
fn server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_answer_healthz() {
    let response = server().get("/healthz").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let response = server().get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_malformed_department_id() {
    let response = server().delete("/departments/not-a-uuid").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn should_reject_malformed_position_id() {
    let response = server().delete("/positions/42").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn should_hide_storage_failure_behind_internal_error() {
    let response = server().get("/departments").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "internal error");
}

#[tokio::test]
async fn should_reject_blank_department_name_before_storage() {
    let response = server()
        .post("/departments")
        .json(&serde_json::json!({ "name": "   " }))
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_NAME");
}

#[tokio::test]
async fn should_attach_request_id() {
    let response = server().get("/healthz").await;
    let id = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn should_propagate_caller_request_id() {
    let response = server()
        .get("/healthz")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-123"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "req-123");
}
