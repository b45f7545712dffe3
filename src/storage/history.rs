//! Append-only evaluation history.
//!
//! [`HistoryStore`] is the persistence seam of the evaluator. The SQLite
//! implementation writes to the `domain_results` table; the in-memory one in
//! [`super::memory`] is a test double for the evaluator and mode tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::path::Path;

use crate::error_handling::DatabaseError;
use crate::models::EvaluationRecord;

use super::migrations::run_migrations;
use super::pool::init_db_pool_with_path;

/// Durable log of past evaluations.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends `record` and returns the id assigned to it.
    ///
    /// The caller's record is left untouched.
    async fn save(&self, record: &EvaluationRecord) -> Result<i64, DatabaseError>;

    /// Up to `limit` records for exactly `domain`, newest first.
    ///
    /// A non-positive `limit` yields no rows.
    async fn query_by_domain(
        &self,
        domain: &str,
        limit: i64,
    ) -> Result<Vec<EvaluationRecord>, DatabaseError>;

    /// Releases underlying resources. Safe to call more than once.
    async fn close(&self);
}

/// SQLite-backed history store.
#[derive(Clone)]
pub struct SqliteHistoryStore {
    pool: SqlitePool,
}

impl SqliteHistoryStore {
    /// Opens (creating if needed) the database at `db_path` and migrates it.
    pub async fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        let pool = init_db_pool_with_path(db_path).await?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, running migrations first.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, DatabaseError> {
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn ensure_open(&self) -> Result<(), DatabaseError> {
        if self.pool.is_closed() {
            Err(DatabaseError::Closed)
        } else {
            Ok(())
        }
    }
}

fn record_from_row(row: &SqliteRow) -> Result<EvaluationRecord, sqlx::Error> {
    let spf_record: Option<String> = row.try_get("spf_record")?;
    let dmarc_record: Option<String> = row.try_get("dmarc_record")?;
    let checked_at: DateTime<Utc> = row.try_get("checked_at")?;
    Ok(EvaluationRecord {
        id: row.try_get("id")?,
        domain: row.try_get("domain")?,
        has_mx: row.try_get("has_mx")?,
        has_spf: row.try_get("has_spf")?,
        spf_record: spf_record.unwrap_or_default(),
        has_dmarc: row.try_get("has_dmarc")?,
        dmarc_record: dmarc_record.unwrap_or_default(),
        checked_at,
    })
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn save(&self, record: &EvaluationRecord) -> Result<i64, DatabaseError> {
        self.ensure_open()?;
        let id = sqlx::query(
            "INSERT INTO domain_results (
                domain, has_mx, has_spf, spf_record, has_dmarc, dmarc_record, checked_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id",
        )
        .bind(&record.domain)
        .bind(record.has_mx)
        .bind(record.has_spf)
        .bind(&record.spf_record)
        .bind(record.has_dmarc)
        .bind(&record.dmarc_record)
        .bind(record.checked_at)
        .fetch_one(&self.pool)
        .await?
        .try_get::<i64, _>(0)?;
        Ok(id)
    }

    async fn query_by_domain(
        &self,
        domain: &str,
        limit: i64,
    ) -> Result<Vec<EvaluationRecord>, DatabaseError> {
        self.ensure_open()?;
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            "SELECT id, domain, has_mx, has_spf, spf_record, has_dmarc, dmarc_record, checked_at
             FROM domain_results
             WHERE domain = ?
             ORDER BY checked_at DESC, id DESC
             LIMIT ?",
        )
        .bind(domain)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .iter()
            .map(record_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
