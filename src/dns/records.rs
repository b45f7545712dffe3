//! `hickory-resolver` backed [`DnsClient`].

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use super::client::{DnsClient, DnsError, MxHost};

/// Queries the network through a shared hickory resolver.
#[derive(Clone)]
pub struct HickoryDnsClient {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryDnsClient {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    fn classify_error(e: &ResolveError) -> DnsError {
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
                ResponseCode::NXDomain => DnsError::NxDomain,
                ResponseCode::ServFail => DnsError::ServFail,
                _ => DnsError::NoRecords,
            },
            ResolveErrorKind::Timeout => DnsError::Timeout,
            _ => DnsError::Other(e.to_string()),
        }
    }
}

#[async_trait]
impl DnsClient for HickoryDnsClient {
    async fn query_mx(&self, domain: &str) -> Result<Vec<MxHost>, DnsError> {
        let lookup = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| Self::classify_error(&e))?;

        let mut hosts: Vec<MxHost> = lookup
            .iter()
            .map(|mx| {
                MxHost::new(
                    mx.preference(),
                    mx.exchange().to_utf8().trim_end_matches('.'),
                )
            })
            .collect();
        // Sort by priority (lower preference = higher priority)
        hosts.sort_by_key(|host| host.preference);
        Ok(hosts)
    }

    async fn query_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let lookup = self
            .resolver
            .txt_lookup(name)
            .await
            .map_err(|e| Self::classify_error(&e))?;

        Ok(lookup
            .iter()
            .map(|txt| {
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                    .collect::<Vec<String>>()
                    .join("")
            })
            .collect())
    }
}
