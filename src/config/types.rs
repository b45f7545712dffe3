//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DB_PATH_ENV, DEFAULT_DB_PATH, DEFAULT_DNS_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "domain_security_checker",
    version,
    about = "Checks MX, SPF and DMARC records for domains and keeps a history of the results"
)]
pub struct Opt {
    /// What to do (defaults to `interactive`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Per-lookup DNS timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log DNS lookup failures and other diagnostics (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// History database path (SQLite file)
    #[arg(long, global = true, env = DB_PATH_ENV, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}

/// Run modes.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Evaluate one domain and print a summary
    Check {
        /// Domain to evaluate
        domain: String,
    },

    /// Evaluate every domain listed in a file and write CSV
    Batch {
        /// Newline-delimited domains (blank lines and `#` comments are skipped)
        file: PathBuf,

        /// Write CSV to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read domains from stdin until end of input
    Interactive,

    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "DOMAIN_CHECKER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Print stored evaluations of a domain, newest first
    History {
        /// Domain to look up (exact match)
        domain: String,

        /// Maximum number of rows (non-positive means the default of 10)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
}

impl Opt {
    /// Settings shared by every run mode.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            verbose: self.verbose,
            db_path: self.db_path.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }

    /// Selected run mode; interactive when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use domain_security_checker::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("history.db"),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Surface lookup failures in the log (forces debug level)
    pub verbose: bool,

    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Per-lookup DNS timeout in seconds
    pub timeout_seconds: u64,
}

impl Config {
    /// Per-lookup DNS timeout.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Log level after applying `verbose`.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.verbose {
            level.max(log::LevelFilter::Debug)
        } else {
            level
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            verbose: false,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            timeout_seconds: DEFAULT_DNS_TIMEOUT_SECS,
        }
    }
}
