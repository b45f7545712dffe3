//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_security_checker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_security_checker::initialization::init_logger_with;
use domain_security_checker::{run_command, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so that
    // DOMAIN_CHECKER_DB_PATH and DOMAIN_CHECKER_PORT can be set there
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let opt = Opt::parse();
    let config = opt.config();

    // Initialize logger based on config
    init_logger_with(config.effective_log_level(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run_command(&config, opt.command()).await {
        eprintln!("domain_security_checker error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
