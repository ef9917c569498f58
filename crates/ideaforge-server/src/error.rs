use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ideaforge_core::error::Error;

/// Application error type that maps pipeline failures to HTTP responses.
///
/// Every pipeline failure surfaces as a single aggregate 500 with the error
/// message; stack traces and per-idea details stay in the logs.
#[derive(Debug)]
pub struct AppError(Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
