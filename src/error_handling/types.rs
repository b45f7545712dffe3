//! Error type definitions.
//!
//! This module defines the error types surfaced by initialization, storage and
//! domain evaluation. DNS lookup failures are deliberately absent: they are
//! absorbed by the resolver and never reach a caller.

use log::SetLoggerError;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] MigrateError),

    /// The store was used after `close()`.
    #[error("History store is closed")]
    Closed,
}

/// Errors returned by the evaluation engine.
#[derive(Error, Debug)]
pub enum EvaluationError {
    /// Empty or blank domain input, rejected before any DNS query.
    #[error("Invalid domain: {0:?}")]
    InvalidDomain(String),

    /// History store failure (only surfaced for history reads).
    #[error("Persistence failure: {0}")]
    Persistence(#[from] DatabaseError),
}
