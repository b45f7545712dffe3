//! DNS module tests.

use super::*;
use std::sync::Arc;
use std::time::Duration;

/// Creates a resolver over scripted answers with a short timeout.
fn create_test_resolver(client: &StaticDnsClient) -> Resolver {
    Resolver::new(Arc::new(client.clone()), Duration::from_millis(200))
}

#[tokio::test]
async fn test_lookup_mx_returns_hosts() {
    let client = StaticDnsClient::new();
    client.add_mx("example.com", &[(10, "mx1.example.com"), (20, "mx2.example.com")]);
    let resolver = create_test_resolver(&client);

    let hosts = resolver.lookup_mx("example.com").await;
    assert_eq!(
        hosts,
        vec![
            MxHost::new(10, "mx1.example.com"),
            MxHost::new(20, "mx2.example.com")
        ]
    );
}

#[tokio::test]
async fn test_lookup_mx_no_records_is_empty() {
    let client = StaticDnsClient::new();
    let resolver = create_test_resolver(&client);

    assert!(resolver.lookup_mx("example.com").await.is_empty());
    assert_eq!(client.query_count(), 1);
}

#[tokio::test]
async fn test_lookup_failures_are_absorbed() {
    let client = StaticDnsClient::new();
    client.fail("nxdomain.example", DnsError::NxDomain);
    client.fail("servfail.example", DnsError::ServFail);
    client.fail("broken.example", DnsError::Other("malformed name".to_string()));
    let resolver = create_test_resolver(&client);

    for name in ["nxdomain.example", "servfail.example", "broken.example"] {
        assert!(resolver.lookup_mx(name).await.is_empty(), "{name} MX");
        assert!(resolver.lookup_txt(name).await.is_empty(), "{name} TXT");
    }
}

#[tokio::test]
async fn test_lookup_timeout_is_empty() {
    let client = StaticDnsClient::new();
    client.add_txt("slow.example", &["v=spf1 -all"]);
    client.delay("slow.example", Duration::from_secs(5));
    let resolver = create_test_resolver(&client);

    let started = std::time::Instant::now();
    let records = resolver.lookup_txt("slow.example").await;
    assert!(records.is_empty());
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "timeout should bound the lookup"
    );
}

#[tokio::test]
async fn test_lookup_txt_preserves_order() {
    let client = StaticDnsClient::new();
    client.add_txt("example.com", &["first", "second", "third"]);
    let resolver = create_test_resolver(&client);

    assert_eq!(
        resolver.lookup_txt("example.com").await,
        vec!["first", "second", "third"]
    );
}

#[tokio::test]
async fn test_static_client_is_case_insensitive() {
    let client = StaticDnsClient::new();
    client.add_txt("Example.COM", &["v=spf1 -all"]);

    let records = client.query_txt("example.com").await.expect("records");
    assert_eq!(records, vec!["v=spf1 -all"]);
}

#[tokio::test]
async fn test_static_client_reports_failure() {
    let client = StaticDnsClient::new();
    client.fail("example.com", DnsError::Timeout);

    assert_eq!(
        client.query_mx("example.com").await,
        Err(DnsError::Timeout)
    );
}

#[test]
fn test_dmarc_name() {
    assert_eq!(dmarc_name("example.com"), "_dmarc.example.com");
}

#[test]
fn test_resolver_reports_timeout() {
    let client = StaticDnsClient::new();
    let resolver = Resolver::new(Arc::new(client), Duration::from_secs(3));
    assert_eq!(resolver.timeout(), Duration::from_secs(3));
}
