// models.rs
// Evaluation result shared by the printer, CSV writer, HTTP API and history store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one domain evaluation.
///
/// Created fresh for every call to [`Evaluator::evaluate`](crate::Evaluator::evaluate)
/// and never modified after it is returned. Every field keeps its zero value
/// when the corresponding lookup failed or found nothing, so a lookup error is
/// indistinguishable from an absent record here.
///
/// Invariants: `has_spf == !spf_record.is_empty()` and
/// `has_dmarc == !dmarc_record.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Identity assigned by the history store; `0` until persisted.
    #[serde(default)]
    pub id: i64,
    /// Normalized domain name (never empty).
    pub domain: String,
    #[serde(rename = "hasMX")]
    pub has_mx: bool,
    #[serde(rename = "hasSPF")]
    pub has_spf: bool,
    #[serde(rename = "spfRecord")]
    pub spf_record: String,
    #[serde(rename = "hasDMARC")]
    pub has_dmarc: bool,
    #[serde(rename = "dmarcRecord")]
    pub dmarc_record: String,
    /// Wall-clock time stamped once, before the first lookup.
    #[serde(rename = "checkedAt")]
    pub checked_at: DateTime<Utc>,
}

impl EvaluationRecord {
    /// Starts an empty (all-false) record for `domain` stamped at `checked_at`.
    pub fn new(domain: impl Into<String>, checked_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            domain: domain.into(),
            has_mx: false,
            has_spf: false,
            spf_record: String::new(),
            has_dmarc: false,
            dmarc_record: String::new(),
            checked_at,
        }
    }

    /// Records the SPF match (if any), keeping `has_spf` in step with `spf_record`.
    pub fn set_spf(&mut self, record: Option<&str>) {
        self.spf_record = record.unwrap_or_default().to_string();
        self.has_spf = !self.spf_record.is_empty();
    }

    /// Records the DMARC match (if any), keeping `has_dmarc` in step with `dmarc_record`.
    pub fn set_dmarc(&mut self, record: Option<&str>) {
        self.dmarc_record = record.unwrap_or_default().to_string();
        self.has_dmarc = !self.dmarc_record.is_empty();
    }
}
