//! In-memory history store for tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error_handling::DatabaseError;
use crate::models::EvaluationRecord;

use super::history::HistoryStore;

#[derive(Default)]
struct Log {
    records: Vec<EvaluationRecord>,
    closed: bool,
}

/// Test double that keeps evaluations in process memory.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    log: Mutex<Log>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records saved so far.
    pub fn len(&self) -> usize {
        self.log().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn log(&self) -> MutexGuard<'_, Log> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn save(&self, record: &EvaluationRecord) -> Result<i64, DatabaseError> {
        let mut log = self.log();
        if log.closed {
            return Err(DatabaseError::Closed);
        }
        let id = i64::try_from(log.records.len()).unwrap_or(i64::MAX - 1) + 1;
        let mut stored = record.clone();
        stored.id = id;
        log.records.push(stored);
        Ok(id)
    }

    async fn query_by_domain(
        &self,
        domain: &str,
        limit: i64,
    ) -> Result<Vec<EvaluationRecord>, DatabaseError> {
        let log = self.log();
        if log.closed {
            return Err(DatabaseError::Closed);
        }
        let limit = usize::try_from(limit).unwrap_or(0);
        let mut matches: Vec<EvaluationRecord> = log
            .records
            .iter()
            .filter(|record| record.domain == domain)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.checked_at.cmp(&a.checked_at).then(b.id.cmp(&a.id)));
        matches.truncate(limit);
        Ok(matches)
    }

    async fn close(&self) {
        self.log().closed = true;
    }
}
