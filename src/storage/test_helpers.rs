//! Shared test helpers for storage module tests.
//!
//! This module provides common utilities for database setup and test data creation
//! used across storage module tests.

#[cfg(test)]
use chrono::{Duration, TimeZone, Utc};
#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

#[cfg(test)]
use crate::models::EvaluationRecord;

/// Creates an in-memory test database pool (schema not yet applied).
///
/// A single long-lived connection is used because every SQLite in-memory
/// connection is its own database.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool")
}

/// Creates an all-false record checked `minutes` after 2024-01-01 00:00 UTC.
#[cfg(test)]
pub fn sample_record(domain: &str, minutes: i64) -> EvaluationRecord {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    EvaluationRecord::new(domain, base + Duration::minutes(minutes))
}
