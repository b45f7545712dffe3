//! Test double for [`DnsClient`] with scripted answers.
//!
//! Lets unit and integration tests drive the resolver without network
//! access. Names are matched case-insensitively; unknown names answer with
//! [`DnsError::NoRecords`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use super::client::{DnsClient, DnsError, MxHost};

#[derive(Default)]
struct Zone {
    mx: HashMap<String, Vec<MxHost>>,
    txt: HashMap<String, Vec<String>>,
    failures: HashMap<String, DnsError>,
    delays: HashMap<String, Duration>,
}

/// Scriptable DNS answers keyed by name.
#[derive(Clone, Default)]
pub struct StaticDnsClient {
    zone: Arc<Mutex<Zone>>,
    queries: Arc<AtomicUsize>,
}

impl StaticDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn zone(&self) -> MutexGuard<'_, Zone> {
        // A poisoned lock only means another test thread panicked mid-insert
        self.zone.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Publishes MX answers for `domain` as `(preference, exchange)` pairs.
    pub fn add_mx(&self, domain: &str, records: &[(u16, &str)]) {
        let hosts = records
            .iter()
            .map(|(preference, exchange)| MxHost::new(*preference, *exchange))
            .collect();
        self.zone().mx.insert(domain.to_lowercase(), hosts);
    }

    /// Publishes TXT answers at `name`, in the given order.
    pub fn add_txt(&self, name: &str, records: &[&str]) {
        let records = records.iter().map(|r| r.to_string()).collect();
        self.zone().txt.insert(name.to_lowercase(), records);
    }

    /// Makes every query for `name` fail with `error`.
    pub fn fail(&self, name: &str, error: DnsError) {
        self.zone().failures.insert(name.to_lowercase(), error);
    }

    /// Delays every answer for `name`.
    pub fn delay(&self, name: &str, delay: Duration) {
        self.zone().delays.insert(name.to_lowercase(), delay);
    }

    /// Number of queries answered (or attempted) so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    async fn prepare(&self, name: &str) -> Result<String, DnsError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let key = name.to_lowercase();
        let (delay, failure) = {
            let zone = self.zone();
            (zone.delays.get(&key).copied(), zone.failures.get(&key).cloned())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(key),
        }
    }
}

#[async_trait]
impl DnsClient for StaticDnsClient {
    async fn query_mx(&self, domain: &str) -> Result<Vec<MxHost>, DnsError> {
        let key = self.prepare(domain).await?;
        self.zone().mx.get(&key).cloned().ok_or(DnsError::NoRecords)
    }

    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let key = self.prepare(name).await?;
        self.zone().txt.get(&key).cloned().ok_or(DnsError::NoRecords)
    }
}
