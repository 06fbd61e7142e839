use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body every service returns for a failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub kind: &'a str,
    pub message: String,
}

/// Render a service error as `{kind, message}` with the given status.
///
/// Only 5xx responses are logged here; `TraceLayer` already records every
/// request's status. `cause` is logged but never sent to the client.
pub fn error_response(
    status: StatusCode,
    kind: &str,
    message: String,
    cause: Option<&dyn std::fmt::Display>,
) -> Response {
    if status.is_server_error() {
        match cause {
            Some(cause) => tracing::error!(error = %cause, kind, "internal error"),
            None => tracing::error!(kind, "internal error"),
        }
    }
    (status, axum::Json(ErrorBody { kind, message })).into_response()
}
