//! TXT record classification.
//!
//! Matching is a strict, case-sensitive prefix test on the raw record text as
//! returned by the resolver. Nothing is trimmed or unquoted first, so
//! `" v=spf1 -all"` and `"V=DMARC1; p=none"` do not match.

/// Marker that opens an SPF record.
pub const SPF_MARKER: &str = "v=spf1";

/// Marker that opens a DMARC record.
pub const DMARC_MARKER: &str = "v=DMARC1";

/// Returns the first record (in the given order) that starts with `marker`.
///
/// When several records match only the first is returned. DNS does not
/// guarantee answer order, so with duplicate SPF or DMARC records the chosen
/// one may differ between lookups.
pub fn find_first_matching<'a, S: AsRef<str>>(records: &'a [S], marker: &str) -> Option<&'a str> {
    records
        .iter()
        .map(|txt| txt.as_ref())
        .find(|txt: &&str| txt.starts_with(marker))
}

/// Extracts the SPF record from TXT records published at the domain itself.
pub fn extract_spf_record<S: AsRef<str>>(txt_records: &[S]) -> Option<&str> {
    find_first_matching(txt_records, SPF_MARKER)
}

/// Extracts the DMARC record from TXT records published at `_dmarc.<domain>`.
pub fn extract_dmarc_record<S: AsRef<str>>(txt_records: &[S]) -> Option<&str> {
    find_first_matching(txt_records, DMARC_MARKER)
}
