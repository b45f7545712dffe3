//! API server HTTP handlers.

mod check;
mod history;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorResponse;
use crate::error_handling::EvaluationError;

pub use check::check_handler;
pub use history::history_handler;

/// Maps an evaluation error onto a JSON error response.
///
/// Invalid input is the caller's fault (400); anything else is ours (500).
pub(crate) fn error_response(error: &EvaluationError) -> Response {
    let status = match error {
        EvaluationError::InvalidDomain(_) => StatusCode::BAD_REQUEST,
        EvaluationError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Answers requests whose domain path segment is empty.
pub async fn missing_domain_handler() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Domain required".to_string(),
        }),
    )
        .into_response()
}
