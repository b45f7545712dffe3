//! DNS lookups and TXT classification.
//!
//! This module provides:
//! - [`DnsClient`]: raw MX/TXT queries, backed by `hickory-resolver`
//!   ([`HickoryDnsClient`]) or scripted answers ([`StaticDnsClient`])
//! - [`Resolver`]: timeout-bounded, fail-soft lookups used by the evaluator
//! - [`classify`]: SPF/DMARC marker matching on raw TXT strings

pub mod classify;
mod client;
mod records;
mod resolver;
mod static_client;

// Re-export public API
pub use classify::{
    extract_dmarc_record, extract_spf_record, find_first_matching, DMARC_MARKER, SPF_MARKER,
};
pub use client::{DnsClient, DnsError, MxHost};
pub use records::HickoryDnsClient;
pub use resolver::{dmarc_name, Resolver, DMARC_PREFIX};
pub use static_client::StaticDnsClient;

#[cfg(test)]
mod tests;
