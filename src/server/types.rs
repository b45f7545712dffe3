//! API server data structures.

use serde::{Deserialize, Serialize};

use crate::evaluation::Evaluator;

/// Shared state for the API server
#[derive(Clone)]
pub struct ApiState {
    pub evaluator: Evaluator,
}

impl ApiState {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }
}

/// Query string of `/history/{domain}`
///
/// `limit` is kept as text so that a malformed value falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<String>,
}

impl HistoryParams {
    /// Parsed limit, or `None` when absent or not an integer.
    pub fn limit(&self) -> Option<i64> {
        self.limit
            .as_deref()
            .and_then(|limit| limit.trim().parse::<i64>().ok())
    }
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_params_limit() {
        let params = |limit: Option<&str>| HistoryParams {
            limit: limit.map(str::to_string),
        };
        assert_eq!(params(None).limit(), None);
        assert_eq!(params(Some("5")).limit(), Some(5));
        assert_eq!(params(Some(" 7 ")).limit(), Some(7));
        assert_eq!(params(Some("-2")).limit(), Some(-2));
        assert_eq!(params(Some("ten")).limit(), None);
        assert_eq!(params(Some("")).limit(), None);
    }
}
