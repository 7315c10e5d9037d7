//! Transport capability: one HTTP round trip.

use async_trait::async_trait;

use crate::{HttpClientConfig, Result};

/// A single HTTP round trip.
///
/// The send pipeline depends only on this contract, never on a concrete
/// transport. Anything that can turn a request into a response can stand
/// in for the network; the integration tests drive the full pipeline
/// through canned transports without opening a socket.
///
/// Cancellation and timeouts are the transport's responsibility; the send
/// pipeline does not impose either.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request and return the raw response.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from client configuration.
    pub fn new(config: &HttpClientConfig) -> Self {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { inner }
    }

    /// Get the underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(&HttpClientConfig::default())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        Ok(self.inner.execute(request).await?)
    }
}
