//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;
use crate::dns::{HickoryDnsClient, Resolver};

/// Initializes the hickory resolver used for MX/TXT lookups.
///
/// Uses the default upstream configuration (Google DNS) with `timeout`
/// applied to each query and a reduced attempt count so unresponsive servers
/// fail fast.
pub fn init_resolver(timeout: Duration) -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}

/// Builds the fail-soft [`Resolver`] over the network, bounded by `timeout`
/// per lookup.
pub fn init_dns_resolver(timeout: Duration) -> Resolver {
    let client = HickoryDnsClient::new(init_resolver(timeout));
    Resolver::new(Arc::new(client), timeout)
}
