//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, defaults, output layout)
//! - CLI option types and parsing
//! - The library-level [`Config`] built from them

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, Config, LogFormat, LogLevel, Opt};
