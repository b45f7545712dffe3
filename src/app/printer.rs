//! Human-readable evaluation summaries.

use std::io::{self, Write};

use crate::config::SUMMARY_TIME_FORMAT;
use crate::models::EvaluationRecord;

/// Separator printed after each summary block in interactive and history output.
pub const BLOCK_SEPARATOR: &str = "---";

/// Formats the summary block for `record`.
pub fn format_summary(record: &EvaluationRecord) -> String {
    format!(
        "Domain: {}\nMX Records: {}\nSPF Record: {} ({})\nDMARC Record: {} ({})\nChecked: {}\n",
        record.domain,
        record.has_mx,
        record.has_spf,
        record.spf_record,
        record.has_dmarc,
        record.dmarc_record,
        record.checked_at.format(SUMMARY_TIME_FORMAT)
    )
}

/// Writes the summary block for `record` to `out`.
pub fn write_summary<W: Write>(out: &mut W, record: &EvaluationRecord) -> io::Result<()> {
    out.write_all(format_summary(record).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_summary() {
        let mut record = EvaluationRecord::new(
            "example.com",
            Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap(),
        );
        record.has_mx = true;
        record.set_spf(Some("v=spf1 -all"));

        assert_eq!(
            format_summary(&record),
            "Domain: example.com\n\
             MX Records: true\n\
             SPF Record: true (v=spf1 -all)\n\
             DMARC Record: false ()\n\
             Checked: 2024-03-05 07:08:09\n"
        );
    }
}
