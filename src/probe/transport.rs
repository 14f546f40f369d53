//! HTTP transport abstraction used by the probe runner.

use super::error::TransportFault;
use async_trait::async_trait;
use std::error::Error as StdError;
use std::time::Duration;

/// GET-capable HTTP client with a per-request deadline.
///
/// Designed to be shared as `Arc<dyn Transport>` across concurrent probes.
/// Implementations must not hold mutable state between requests.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Issue a GET to `url` and return the final response status code.
    ///
    /// # Returns
    ///
    /// - `Ok(status)` for any received response, including 4xx and 5xx
    /// - `Err(TransportFault::Timeout)` if no response arrived within `timeout`
    /// - `Err(TransportFault::Failed)` for any other transport-level fault
    async fn get(&self, url: &str, timeout: Duration) -> Result<u16, TransportFault>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with its own connection pool.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Create a transport around an existing client (for testing).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<u16, TransportFault> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_error(e, timeout))?;

        Ok(response.status().as_u16())
    }
}

/// Classify a reqwest error into a [`TransportFault`].
fn classify_error(e: reqwest::Error, timeout: Duration) -> TransportFault {
    if e.is_timeout() {
        TransportFault::Timeout(timeout)
    } else {
        TransportFault::Failed(describe_error(&e))
    }
}

/// Flatten an error and its source chain into one line.
///
/// reqwest's top-level message ("error sending request for url ...") hides the
/// actual cause, e.g. "Connection refused", in the source chain.
pub(crate) fn describe_error(e: &(dyn StdError + 'static)) -> String {
    let mut description = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}
