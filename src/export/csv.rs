//! CSV export of evaluation records.
//!
//! One row per evaluated domain with the columns
//! `domain,hasMX,hasSPF,spfRecord,hasDMARC,dmarcRecord`. The two record
//! columns are always quoted; the domain is quoted only when it contains a
//! delimiter, quote or line break.

use std::borrow::Cow;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Writer, WriterBuilder};
use std::io::{self, Write};
use std::path::Path;

use crate::config::CSV_HEADER;
use crate::models::EvaluationRecord;

/// Opens the CSV destination: `output` when given, stdout otherwise.
pub fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(output_path) => {
            let file = std::fs::File::create(output_path).with_context(|| {
                format!("Failed to create output file: {}", output_path.display())
            })?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Wraps `field` in double quotes, doubling any quote inside it.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quotes `field` only when it would otherwise break the row.
fn quoted_if_needed(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(quoted(field))
    } else {
        Cow::Borrowed(field)
    }
}

/// Streams evaluation records as CSV rows.
pub struct CsvExporter<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl<W: Write> CsvExporter<W> {
    /// Wraps `inner` and writes the header row.
    pub fn new(inner: W) -> Result<Self> {
        // Quoting is decided per column in `write`
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(inner);
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
        Ok(Self { writer, rows: 0 })
    }

    /// Appends one row for `record`.
    pub fn write(&mut self, record: &EvaluationRecord) -> Result<()> {
        let has_mx = record.has_mx.to_string();
        let has_spf = record.has_spf.to_string();
        let has_dmarc = record.has_dmarc.to_string();
        let domain = quoted_if_needed(&record.domain);
        let spf_record = quoted(&record.spf_record);
        let dmarc_record = quoted(&record.dmarc_record);
        self.writer
            .write_record([
                domain.as_ref(),
                has_mx.as_str(),
                has_spf.as_str(),
                spf_record.as_str(),
                has_dmarc.as_str(),
                dmarc_record.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", record.domain))?;
        // Rows go out as they are produced so a long batch shows progress
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}
