//! HTTP client error types.

use thiserror::Error;

/// Result type for HTTP client operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// HTTP client errors.
///
/// A well-formed non-2xx exchange is not an error: it comes back as an
/// `Ok` [`Response`](crate::Response) carrying a decoded error payload.
/// Only transport-, serialization-, and I/O-level problems land here.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection-level failure reported by a transport.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Form encoding error.
    #[error("Form encoding error: {0}")]
    Form(String),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpClientError {
    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_)) || matches!(self, Self::Http(e) if e.is_connect())
    }

    /// Check if this is a JSON or form encode/decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Form(_))
    }
}
