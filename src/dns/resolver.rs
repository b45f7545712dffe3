//! Fail-soft DNS lookups.
//!
//! Every lookup is bounded by the timeout given at construction. Errors and
//! timeouts are logged at debug level and turned into an empty answer, so a
//! failed lookup looks exactly like a name with no records.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use super::client::{DnsClient, DnsError, MxHost};

/// Prefix of the name queried for a domain's DMARC policy.
pub const DMARC_PREFIX: &str = "_dmarc.";

/// Returns the DMARC policy name for `domain`.
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_PREFIX}{domain}")
}

/// Performs the lookups one evaluation needs, never failing.
#[derive(Clone)]
pub struct Resolver {
    client: Arc<dyn DnsClient>,
    timeout: Duration,
}

impl Resolver {
    pub fn new(client: Arc<dyn DnsClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Per-lookup timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// MX hosts for `domain`; empty when none exist or the lookup failed.
    pub async fn lookup_mx(&self, domain: &str) -> Vec<MxHost> {
        self.bounded("MX", domain, self.client.query_mx(domain)).await
    }

    /// TXT strings at `name`; empty when none exist or the lookup failed.
    pub async fn lookup_txt(&self, name: &str) -> Vec<String> {
        self.bounded("TXT", name, self.client.query_txt(name)).await
    }

    async fn bounded<T, F>(&self, kind: &str, name: &str, query: F) -> Vec<T>
    where
        F: Future<Output = Result<Vec<T>, DnsError>>,
    {
        let error = match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(answers)) => return answers,
            Ok(Err(e)) => e,
            Err(_) => DnsError::Timeout,
        };
        match error {
            DnsError::NoRecords | DnsError::NxDomain => {
                debug!("No {kind} records for {name}: {error}");
            }
            DnsError::Timeout => {
                debug!(
                    "{kind} lookup timed out for {name} after {:?}",
                    self.timeout
                );
            }
            _ => debug!("{kind} lookup failed for {name}: {error}"),
        }
        Vec::new()
    }
}
