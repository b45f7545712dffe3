// Shared test helpers for building evaluators over fake DNS and a test database.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use domain_security_checker::{
    init_db_pool_with_path, run_migrations, Evaluator, Resolver, SqliteHistoryStore,
    StaticDnsClient,
};

/// Per-lookup timeout used by test evaluators.
#[allow(dead_code)] // Used by other test files
pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database pinned to a single connection so every query
/// sees the same database.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Creates a migrated pool backed by a file at `db_path`.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_pool_with_path(db_path: &Path) -> SqlitePool {
    let pool = init_db_pool_with_path(db_path)
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Fake DNS zone with a fully configured domain and an unconfigured one.
///
/// - `good.example`: MX, SPF and DMARC present
/// - `spf-only.example`: SPF only
/// - everything else: no records
#[allow(dead_code)] // Used by other test files
pub fn create_test_zone() -> StaticDnsClient {
    let client = StaticDnsClient::new();
    client.add_mx("good.example", &[(10, "mx1.good.example."), (20, "mx2.good.example.")]);
    client.add_txt(
        "good.example",
        &["google-site-verification=abc", "v=spf1 include:_spf.good.example ~all"],
    );
    client.add_txt("_dmarc.good.example", &["v=DMARC1; p=reject"]);
    client.add_txt("spf-only.example", &["v=spf1 -all"]);
    client
}

/// Evaluator over `client` that persists into a fresh in-memory SQLite store.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_evaluator(client: &StaticDnsClient) -> Evaluator {
    let store = SqliteHistoryStore::from_pool(create_test_pool().await)
        .await
        .expect("Failed to open history store");
    let resolver = Resolver::new(Arc::new(client.clone()), TEST_TIMEOUT);
    Evaluator::new(resolver, Arc::new(store))
}
