//! CLI run modes: single check, batch, interactive and history.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::evaluation::Evaluator;
use crate::export::{open_output, CsvExporter};

use super::input::{decode_input_line, read_domains_from_file};
use super::logging::log_progress;
use super::printer::{write_summary, BLOCK_SEPARATOR};

/// Prompt shown before interactive input is read.
pub const INTERACTIVE_PROMPT: &str = "Enter domains (Ctrl+D to finish):";

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Domains read from the input (comments and blanks excluded)
    pub total: usize,
    /// Rows written
    pub written: usize,
    /// Domains skipped because evaluation failed
    pub failed: usize,
}

/// Evaluates one domain and prints its summary.
pub async fn run_single_check<W: Write>(
    evaluator: &Evaluator,
    domain: &str,
    out: &mut W,
) -> Result<()> {
    let record = evaluator
        .evaluate(domain)
        .await
        .with_context(|| format!("Failed to check {domain}"))?;
    write_summary(out, &record)?;
    Ok(())
}

/// Evaluates `domains` in order, writing one CSV row per success to `out`.
///
/// A domain whose evaluation fails is logged and left out; the batch goes on.
pub async fn run_batch<W: Write>(
    evaluator: &Evaluator,
    domains: &[String],
    out: W,
) -> Result<BatchReport> {
    let start_time = Instant::now();
    let mut exporter = CsvExporter::new(out)?;
    let mut failed = 0;

    for domain in domains {
        match evaluator.evaluate(domain).await {
            Ok(record) => exporter.write(&record)?,
            Err(e) => {
                error!("Error checking {domain}: {e}");
                failed += 1;
            }
        }
    }

    let written = exporter.rows();
    exporter.into_inner()?;
    log_progress(start_time, written, failed);

    Ok(BatchReport {
        total: domains.len(),
        written,
        failed,
    })
}

/// Reads the domain list at `file` and runs a batch to `output` (stdout when `None`).
pub async fn run_batch_file(
    evaluator: &Evaluator,
    file: &Path,
    output: Option<&Path>,
) -> Result<BatchReport> {
    let domains = read_domains_from_file(file)?;
    info!("Read {} domains from {}", domains.len(), file.display());
    let writer = open_output(output)?;
    run_batch(evaluator, &domains, writer).await
}

/// Evaluates domains read line by line from `input` until end of input.
///
/// Blank lines are ignored; every other line is evaluated as typed. Lines
/// that are not valid UTF-8 and domains that fail are logged and the loop
/// continues. Returns the number of summaries printed.
pub async fn run_interactive<R, W>(evaluator: &Evaluator, input: R, out: &mut W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{INTERACTIVE_PROMPT}")?;
    out.flush()?;

    let mut lines = input.split(b'\n');
    let mut printed = 0;
    while let Some(raw) = lines
        .next_segment()
        .await
        .context("Failed to read from stdin")?
    {
        let Some(line) = decode_input_line(&raw) else {
            continue;
        };
        let domain = line.trim();
        if domain.is_empty() {
            continue;
        }
        match evaluator.evaluate(domain).await {
            Ok(record) => {
                write_summary(out, &record)?;
                writeln!(out, "{BLOCK_SEPARATOR}")?;
                out.flush()?;
                printed += 1;
            }
            Err(e) => error!("Error: {e}"),
        }
    }
    Ok(printed)
}

/// Prints stored evaluations of `domain`, newest first.
pub async fn run_history<W: Write>(
    evaluator: &Evaluator,
    domain: &str,
    limit: Option<i64>,
    out: &mut W,
) -> Result<usize> {
    let records = evaluator
        .history(domain, limit)
        .await
        .with_context(|| format!("Failed to get history for {domain}"))?;

    if records.is_empty() {
        writeln!(out, "No history for {}", domain.trim())?;
    }
    for record in &records {
        writeln!(out, "ID: {}", record.id)?;
        write_summary(out, record)?;
        writeln!(out, "{BLOCK_SEPARATOR}")?;
    }
    Ok(records.len())
}
