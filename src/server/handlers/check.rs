//! `GET /check/{domain}` handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use super::super::types::ApiState;
use super::error_response;
use crate::error_handling::EvaluationError;

/// Evaluates the domain and returns the record as JSON
pub async fn check_handler(State(state): State<ApiState>, Path(domain): Path<String>) -> Response {
    match state.evaluator.evaluate(&domain).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => {
            if !matches!(e, EvaluationError::InvalidDomain(_)) {
                error!("Error checking domain {domain}: {e}");
            }
            error_response(&e)
        }
    }
}
