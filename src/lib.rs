//! domain_security_checker library: email-authentication posture checks
//!
//! This library evaluates a domain's MX, SPF and DMARC records over DNS,
//! keeps every evaluation in an append-only history log, and exposes the
//! results through a text printer, a CSV exporter and a JSON HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use domain_security_checker::{init_evaluator, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let evaluator = init_evaluator(&Config::default()).await?;
//! let record = evaluator.evaluate("example.com").await?;
//! println!("{}: SPF={} DMARC={}", record.domain, record.has_spf, record.has_dmarc);
//! evaluator.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod dns;
mod error_handling;
mod evaluation;
pub mod export;
pub mod initialization;
mod models;
pub mod server;
mod storage;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, Opt};
pub use dns::{DnsClient, DnsError, HickoryDnsClient, MxHost, Resolver, StaticDnsClient};
pub use error_handling::{DatabaseError, EvaluationError, InitializationError};
pub use evaluation::{effective_limit, normalize_domain, Evaluator};
pub use initialization::init_evaluator;
pub use models::EvaluationRecord;
pub use run::run_command;
pub use storage::{
    init_db_pool_with_path, run_migrations, HistoryStore, InMemoryHistoryStore,
    SqliteHistoryStore,
};

// Internal run module (dispatches a parsed command to its run mode)
mod run {
    use std::io::{self, Write};

    use anyhow::Result;
    use log::info;
    use tokio::io::BufReader;

    use crate::app::{run_batch_file, run_history, run_interactive, run_single_check};
    use crate::config::{Command, Config};
    use crate::initialization::init_evaluator;
    use crate::server::{start_server, ApiState};

    /// Runs `command` with the shared settings in `config`.
    ///
    /// Opens the history database, executes the selected mode and closes the
    /// database again, whether or not the mode succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails, if a single check or history
    /// query fails, if the batch input/output cannot be opened, or if the
    /// server cannot bind.
    pub async fn run_command(config: &Config, command: Command) -> Result<()> {
        let evaluator = init_evaluator(config).await?;
        let mut stdout = io::stdout();

        let result = match command {
            Command::Check { domain } => run_single_check(&evaluator, &domain, &mut stdout).await,
            Command::Batch { file, output } => {
                run_batch_file(&evaluator, &file, output.as_deref())
                    .await
                    .map(|report| {
                        info!(
                            "Batch complete: {} of {} domains written",
                            report.written, report.total
                        );
                    })
            }
            Command::Interactive => {
                let stdin = BufReader::new(tokio::io::stdin());
                run_interactive(&evaluator, stdin, &mut stdout)
                    .await
                    .map(|_| ())
            }
            Command::Serve { host, port } => {
                start_server(&host, port, ApiState::new(evaluator.clone())).await
            }
            Command::History { domain, limit } => {
                run_history(&evaluator, &domain, limit, &mut stdout)
                    .await
                    .map(|_| ())
            }
        };

        stdout.flush()?;
        evaluator.close().await;
        result
    }
}
