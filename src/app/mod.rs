//! Main application modules.
//!
//! This module provides the CLI run modes along with input parsing, summary
//! printing, progress logging and shutdown handling used by the binary.

pub mod input;
pub mod logging;
pub mod modes;
pub mod printer;
pub mod shutdown;

// Re-export public API
pub use input::{
    decode_input_line, parse_domain_line, parse_domain_lines, read_domains_from_file,
};
pub use logging::log_progress;
pub use modes::{
    run_batch, run_batch_file, run_history, run_interactive, run_single_check, BatchReport,
    INTERACTIVE_PROMPT,
};
pub use printer::{format_summary, write_summary, BLOCK_SEPARATOR};
pub use shutdown::shutdown_signal;
