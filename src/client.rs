//! HTTP client and process-wide default client state.

use std::sync::Arc;

use http::Method;
use parking_lot::RwLock;

use crate::{HttpClientConfig, HttpTransport, RequestBuilder, ReqwestTransport};

/// HTTP client bundling shared configuration with a transport capability.
///
/// Cheap to clone; clones share the same configuration and transport.
/// Many in-flight requests may read one client concurrently; the client
/// is never mutated after construction.
#[derive(Clone)]
pub struct HttpClient {
    config: Arc<HttpClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl HttpClient {
    /// Create a client with the given configuration and the default
    /// reqwest-backed transport.
    pub fn new(config: HttpClientConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(&config));
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Create a client with an externally supplied transport capability.
    pub fn with_transport(config: HttpClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, url.into())
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, url.into())
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PUT, url.into())
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PATCH, url.into())
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, url.into())
    }

    /// Create a request builder with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, url.into())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(HttpClientConfig::default())
    }
}

/// Process-wide default client read by the convenience functions.
static DEFAULT_CLIENT: RwLock<Option<HttpClient>> = RwLock::new(None);

/// Install `client` as the process-wide default used by the convenience
/// functions until replaced by a later install.
///
/// Installs are last-write-wins. A send that is already in flight keeps
/// the client it started with, and concurrent installs race benignly
/// under the lock; serialize configuration changes externally if the
/// winner matters.
pub fn install_default_client(client: HttpClient) {
    *DEFAULT_CLIENT.write() = Some(client);
}

/// Snapshot the process-wide default client, or a freshly built default
/// when none has been installed.
pub fn default_client() -> HttpClient {
    DEFAULT_CLIENT.read().as_ref().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::default();
        assert!(client.config().base_url.is_none());
        assert!(!client.config().verbose);
    }

    #[test]
    fn test_client_with_config() {
        let config = HttpClientConfig::builder()
            .timeout(Duration::from_secs(60))
            .base_url("https://api.example.com")
            .build();

        let client = HttpClient::new(config);
        assert_eq!(client.config().timeout, Duration::from_secs(60));
        assert_eq!(
            client.config().base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_install_default_client_last_write_wins() {
        install_default_client(HttpClient::new(
            HttpClientConfig::builder().base_url("https://first").build(),
        ));
        install_default_client(HttpClient::new(
            HttpClientConfig::builder().base_url("https://second").build(),
        ));

        let client = default_client();
        assert_eq!(client.config().base_url.as_deref(), Some("https://second"));
    }
}
