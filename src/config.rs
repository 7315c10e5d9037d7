//! HTTP client configuration.

use std::time::Duration;

/// HTTP client configuration.
///
/// Shared defaults applied to every request sent through a client that
/// holds this configuration. Immutable once a client is built; construct
/// via [`HttpClientConfig::builder`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL prepended to every request URL by plain string
    /// concatenation. Not validated here; a bad value surfaces as an
    /// `InvalidUrl` error when a request is sent.
    pub base_url: Option<String>,
    /// Default headers applied to every request, in insertion order.
    /// Names are case-insensitive and a default header overrides a
    /// same-named header set on an individual request.
    pub default_headers: Vec<(String, String)>,
    /// Emit trace lines for each exchange.
    pub verbose: bool,
    /// Request timeout for the default transport.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            default_headers: Vec::new(),
            verbose: false,
            timeout: Duration::from_secs(30),
            user_agent: format!("jsonfetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client configuration.
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL prepended to every request URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Add a default header for all requests.
    ///
    /// Header names compare case-insensitively; setting a name that
    /// already exists replaces the earlier value in place.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self
            .config
            .default_headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            entry.1 = value;
        } else {
            self.config.default_headers.push((name, value));
        }
        self
    }

    /// Enable or disable verbose exchange tracing.
    pub fn verbose(mut self, enable: bool) -> Self {
        self.config.verbose = enable;
        self
    }

    /// Set the request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = HttpClientConfig::builder().build();
        assert!(config.base_url.is_none());
        assert!(config.default_headers.is_empty());
        assert!(!config.verbose);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_default_header_last_set_wins() {
        let config = HttpClientConfig::builder()
            .default_header("Accept", "text/plain")
            .default_header("X-Api-Key", "k1")
            .default_header("accept", "application/json")
            .build();

        assert_eq!(
            config.default_headers,
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("X-Api-Key".to_string(), "k1".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_chaining() {
        let config = HttpClientConfig::builder()
            .base_url("https://api.example.com")
            .verbose(true)
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent")
            .build();

        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert!(config.verbose);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }
}
