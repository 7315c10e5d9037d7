//! Response model and error-body classification.

use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::{HttpClientError, Result};

/// Decoded payload of a non-2xx response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Body sniffed as a JSON object or array and parsed.
    Json(serde_json::Value),
    /// Anything else, carried as an opaque string.
    Text(String),
}

impl ErrorBody {
    /// Get the parsed JSON value, if the body classified as JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Get the opaque string, if the body classified as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Normalized HTTP response.
///
/// A successful exchange carries the raw body bytes, a non-2xx exchange
/// carries a decoded error payload instead, never both. An exchange
/// whose body was empty carries neither, only the status code.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    body: Option<Bytes>,
    error: Option<ErrorBody>,
}

impl Response {
    /// A response with only the status code populated, used for empty-body
    /// exchanges such as 204 No Content.
    pub(crate) fn status_only(status: StatusCode) -> Self {
        Self {
            status,
            body: None,
            error: None,
        }
    }

    /// Classify a non-empty body by status code.
    ///
    /// 2xx bodies become the success payload verbatim. Non-2xx bodies are
    /// sniffed by their first and last non-whitespace bytes only: a
    /// matching `{`/`}` or `[`/`]` pair is parsed as JSON (a parse failure
    /// after a positive sniff is an error), a whitespace-only body becomes
    /// an empty string, and anything else passes through as an opaque
    /// string.
    pub(crate) fn classify(status: StatusCode, body: Bytes) -> Result<Self> {
        if status.is_success() {
            return Ok(Self {
                status,
                body: Some(body),
                error: None,
            });
        }

        let trimmed = body.trim_ascii();
        let error = if trimmed.is_empty() {
            ErrorBody::Text(String::new())
        } else if is_bracketed(trimmed) {
            let value: serde_json::Value =
                serde_json::from_slice(&body).map_err(|e| HttpClientError::Json(e.to_string()))?;
            ErrorBody::Json(value)
        } else {
            ErrorBody::Text(String::from_utf8_lossy(&body).into_owned())
        };

        Ok(Self {
            status,
            body: None,
            error: Some(error),
        })
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if the response was a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Check if the response was a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Get the success body, if one is present.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume the response and return the success body.
    pub fn into_body(self) -> Option<Bytes> {
        self.body
    }

    /// Get the decoded error payload of a non-2xx response.
    pub fn error(&self) -> Option<&ErrorBody> {
        self.error.as_ref()
    }

    /// Parse the success body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self
            .body
            .as_ref()
            .ok_or_else(|| HttpClientError::Json("response has no body".to_string()))?;
        serde_json::from_slice(body).map_err(|e| HttpClientError::Json(e.to_string()))
    }
}

/// First and last non-whitespace bytes form a matching brace or bracket
/// pair. This is the whole test; no JSON validation happens before the
/// parse decision.
fn is_bracketed(trimmed: &[u8]) -> bool {
    let first = trimmed[0];
    let last = trimmed[trimmed.len() - 1];
    (first == b'{' && last == b'}') || (first == b'[' && last == b']')
}
