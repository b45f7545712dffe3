//! Error handling.
//!
//! Errors fall into two groups:
//! - **Absorbed**: DNS lookup failures (see [`crate::dns::DnsError`]) become
//!   zero-valued record fields and are only ever logged.
//! - **Surfaced**: invalid input, initialization and storage-read failures have
//!   no safe substitute and are returned to the caller.

mod types;

// Re-export public API
pub use types::{DatabaseError, EvaluationError, InitializationError};
