//! Domain list parsing.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

/// Returns the domain on `line`, or `None` for blank and `#` comment lines.
pub fn parse_domain_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}

/// Decodes one raw input line.
///
/// A line that is not valid UTF-8 cannot name a domain and yields `None`. It
/// is logged unless it is blank or a `#` comment once decoded lossily.
pub fn decode_input_line(raw: &[u8]) -> Option<Cow<'_, str>> {
    match std::str::from_utf8(raw) {
        Ok(line) => Some(Cow::Borrowed(line)),
        Err(_) => {
            let lossy = String::from_utf8_lossy(raw);
            if parse_domain_line(&lossy).is_some() {
                warn!("Skipping input line that is not valid UTF-8: {}", lossy.trim());
            }
            None
        }
    }
}

/// Reads newline-delimited domains, skipping blank and comment lines.
///
/// Lines are split on raw bytes, so one undecodable line is skipped instead
/// of failing the whole read.
pub fn parse_domain_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut domains = Vec::new();
    for raw in reader.split(b'\n') {
        let raw = raw?;
        let Some(line) = decode_input_line(&raw) else {
            continue;
        };
        if let Some(domain) = parse_domain_line(&line) {
            domains.push(domain.to_string());
        }
    }
    Ok(domains)
}

/// Reads the domain list at `path`.
pub fn read_domains_from_file(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open domain list {}", path.display()))?;
    parse_domain_lines(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to read domain list {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_comments_and_blanks_skipped() {
        let input = "good.example\n# comment\n\nbad.example\n";
        let domains = parse_domain_lines(Cursor::new(input)).expect("parses");
        assert_eq!(domains, vec!["good.example", "bad.example"]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let input = "  example.com  \r\n\t\n   # indented comment\n";
        let domains = parse_domain_lines(Cursor::new(input)).expect("parses");
        assert_eq!(domains, vec!["example.com"]);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let domains = parse_domain_lines(Cursor::new("a.example\nb.example")).expect("parses");
        assert_eq!(domains, vec!["a.example", "b.example"]);
    }

    #[test]
    fn test_non_utf8_comment_is_skipped() {
        let input: &[u8] = b"good.example\n# caf\xE9\nspf-only.example\n";
        let domains = parse_domain_lines(Cursor::new(input)).expect("parses");
        assert_eq!(domains, vec!["good.example", "spf-only.example"]);
    }

    #[test]
    fn test_non_utf8_domain_line_is_skipped() {
        let input: &[u8] = b"a.example\n\xff\xfe.example\nb.example";
        let domains = parse_domain_lines(Cursor::new(input)).expect("parses");
        assert_eq!(domains, vec!["a.example", "b.example"]);
    }

    #[test]
    fn test_decode_input_line() {
        assert_eq!(decode_input_line(b"example.com\r").as_deref(), Some("example.com\r"));
        assert_eq!(decode_input_line(b"bad\xffname"), None);
    }

    #[test]
    fn test_parse_domain_line() {
        assert_eq!(parse_domain_line("example.com"), Some("example.com"));
        assert_eq!(parse_domain_line("#example.com"), None);
        assert_eq!(parse_domain_line("   "), None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let result = read_domains_from_file(&dir.path().join("missing.txt"));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to open domain list"));
    }
}
