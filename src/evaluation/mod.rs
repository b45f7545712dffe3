//! Domain evaluation engine.
//!
//! [`Evaluator::evaluate`] runs the MX, SPF and DMARC lookups for a domain,
//! classifies the TXT answers, persists the resulting [`EvaluationRecord`] and
//! returns it. Only blank input is an error: DNS failures leave fields at their
//! zero value and persistence failures are logged.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, warn};

use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::dns::{dmarc_name, extract_dmarc_record, extract_spf_record, Resolver};
use crate::error_handling::EvaluationError;
use crate::models::EvaluationRecord;
use crate::storage::HistoryStore;

/// Normalizes user input into the domain that is queried and stored.
///
/// Trims surrounding whitespace, drops one trailing dot and lowercases ASCII
/// letters. Fails with [`EvaluationError::InvalidDomain`] when nothing is left.
pub fn normalize_domain(input: &str) -> Result<String, EvaluationError> {
    let trimmed = input.trim();
    let domain = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if domain.trim().is_empty() {
        return Err(EvaluationError::InvalidDomain(input.to_string()));
    }
    Ok(domain.to_ascii_lowercase())
}

/// History row limit, falling back to the default when unset or non-positive.
pub fn effective_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(limit) if limit > 0 => limit,
        _ => DEFAULT_HISTORY_LIMIT,
    }
}

/// Evaluates domains and records the outcome in a [`HistoryStore`].
#[derive(Clone)]
pub struct Evaluator {
    resolver: Resolver,
    store: Arc<dyn HistoryStore>,
}

impl Evaluator {
    pub fn new(resolver: Resolver, store: Arc<dyn HistoryStore>) -> Self {
        Self { resolver, store }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Evaluates `domain` and persists the result (best effort).
    ///
    /// The MX, SPF and DMARC phases run concurrently; each writes its own
    /// fields, so the record matches what a sequential run would produce.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::InvalidDomain`] for empty or blank input,
    /// before any DNS query is sent.
    pub async fn evaluate(&self, domain: &str) -> Result<EvaluationRecord, EvaluationError> {
        let domain = normalize_domain(domain)?;
        let mut record = EvaluationRecord::new(domain, Utc::now());
        debug!("Checking domain: {}", record.domain);

        let dmarc_domain = dmarc_name(&record.domain);
        let (mx_hosts, txt_records, dmarc_records) = tokio::join!(
            self.resolver.lookup_mx(&record.domain),
            self.resolver.lookup_txt(&record.domain),
            self.resolver.lookup_txt(&dmarc_domain),
        );

        record.has_mx = !mx_hosts.is_empty();
        record.set_spf(extract_spf_record(&txt_records));
        record.set_dmarc(extract_dmarc_record(&dmarc_records));

        match self.store.save(&record).await {
            Ok(id) => record.id = id,
            Err(e) => warn!("Failed to save result for {}: {e}", record.domain),
        }

        Ok(record)
    }

    /// Stored evaluations of `domain`, newest first.
    ///
    /// `limit` defaults to 10 when `None` or non-positive.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::InvalidDomain`] for blank input and
    /// [`EvaluationError::Persistence`] when the store cannot be read.
    pub async fn history(
        &self,
        domain: &str,
        limit: Option<i64>,
    ) -> Result<Vec<EvaluationRecord>, EvaluationError> {
        let domain = normalize_domain(domain)?;
        let records = self
            .store
            .query_by_domain(&domain, effective_limit(limit))
            .await?;
        Ok(records)
    }

    /// Closes the underlying history store.
    pub async fn close(&self) {
        self.store.close().await;
    }
}
