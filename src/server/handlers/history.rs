//! `GET /history/{domain}` handler.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use super::super::types::{ApiState, HistoryParams};
use super::error_response;
use crate::error_handling::EvaluationError;

/// Returns stored evaluations of the domain, newest first
pub async fn history_handler(
    State(state): State<ApiState>,
    Path(domain): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Response {
    match state.evaluator.history(&domain, params.limit()).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            if !matches!(e, EvaluationError::InvalidDomain(_)) {
                error!("Error getting history for {domain}: {e}");
            }
            error_response(&e)
        }
    }
}
