//! Configuration constants.
//!
//! Defaults for the CLI surface and operational parameters shared by the
//! evaluator, the history store and the HTTP API.

/// Default per-lookup DNS timeout in seconds.
pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 10;
/// Attempts per name server before hickory gives up on a query.
pub const DNS_ATTEMPTS: usize = 2;

/// Default SQLite history database.
pub const DEFAULT_DB_PATH: &str = "./domains.db";
/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "DOMAIN_CHECKER_DB_PATH";

/// Default address the HTTP API binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP API port.
pub const DEFAULT_PORT: u16 = 8080;

/// Number of history rows returned when no positive limit is given.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Column header of batch CSV output.
pub const CSV_HEADER: [&str; 6] = [
    "domain",
    "hasMX",
    "hasSPF",
    "spfRecord",
    "hasDMARC",
    "dmarcRecord",
];

/// Timestamp layout used by the text summary.
pub const SUMMARY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
