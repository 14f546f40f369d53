//! Shared test utilities for url-pinger integration tests.

#![allow(dead_code)]

use pinger::probe::{parse_target_list, ProbeKind, ProbeResult, Target};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock server answering GET `route` with `status` after `delay`.
pub async fn mock_target(route: &str, status: u16, delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_delay(delay))
        .mount(&server)
        .await;
    server
}

/// A URL on localhost with nothing listening behind it.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/health", port)
}

pub fn target(url: &str) -> Target {
    Target::new(url).unwrap()
}

pub fn targets(urls: &[String]) -> Vec<Target> {
    parse_target_list(&urls.join(","))
}

/// Find the result for `url`, panicking if it is missing.
pub fn result_for<'a>(results: &'a [ProbeResult], url: &str) -> &'a ProbeResult {
    results
        .iter()
        .find(|r| r.target.as_str() == url)
        .unwrap_or_else(|| panic!("no result for {}", url))
}

/// Sorted list of result kinds, for order-independent comparison.
pub fn sorted_kinds(results: &[ProbeResult]) -> Vec<ProbeKind> {
    let mut kinds: Vec<_> = results.iter().map(ProbeResult::kind).collect();
    kinds.sort();
    kinds
}
