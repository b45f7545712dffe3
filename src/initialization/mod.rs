//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - History store and the evaluator built on top of them
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::evaluation::Evaluator;
use crate::storage::SqliteHistoryStore;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_dns_resolver, init_resolver};

/// Opens the history database and builds an [`Evaluator`] for `config`.
///
/// # Errors
///
/// Returns an error if the database cannot be created, opened or migrated.
pub async fn init_evaluator(config: &Config) -> Result<Evaluator> {
    let store = SqliteHistoryStore::open(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database {}", config.db_path.display()))?;
    let resolver = init_dns_resolver(config.dns_timeout());
    Ok(Evaluator::new(resolver, Arc::new(store)))
}
