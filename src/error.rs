//! Stable error codes and the JSON error body returned by the API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Machine-readable classification for an error surfaced over the API.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Build `{ "error", "code", "retryable" }` with the given status.
pub fn error_response<E: ErrorCode>(status: StatusCode, err: &E) -> Response {
    let body = serde_json::json!({
        "error": err.to_string(),
        "code": err.error_code(),
        "retryable": err.retryable(),
    });
    (status, Json(body)).into_response()
}
