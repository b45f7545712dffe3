//! DNS client abstraction.
//!
//! [`DnsClient`] is the seam between the fail-soft [`Resolver`](super::Resolver)
//! and the wire. Implementations report every failure as a [`DnsError`]; it is
//! the resolver's job to absorb them.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// DNS-layer failure for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("NXDOMAIN: domain does not exist")]
    NxDomain,
    #[error("no records found")]
    NoRecords,
    #[error("SERVFAIL: server failure")]
    ServFail,
    #[error("timeout")]
    Timeout,
    #[error("DNS error: {0}")]
    Other(String),
}

/// One mail exchanger answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxHost {
    /// Lower preference is tried first.
    pub preference: u16,
    /// Exchange host name without the trailing dot.
    pub exchange: String,
}

impl MxHost {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Raw DNS queries needed to evaluate a domain.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Queries MX records for `domain`.
    async fn query_mx(&self, domain: &str) -> Result<Vec<MxHost>, DnsError>;

    /// Queries TXT records at `name`, one string per record.
    ///
    /// Records split into several character-strings are joined without a
    /// separator.
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError>;
}
