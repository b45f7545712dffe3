//! Export of evaluation records.
//!
//! Batch mode streams records through [`CsvExporter`] to stdout or a file.

mod csv;

pub use self::csv::{open_output, CsvExporter};
