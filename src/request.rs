//! Request builder and send pipeline.

use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use tracing::debug;

use crate::{HttpClient, HttpClientError, Response, Result};

/// HTTP request builder.
///
/// Created by the verb methods on [`HttpClient`] and consumed by
/// [`send`](Self::send) or [`send_raw`](Self::send_raw). Each builder
/// exclusively owns its header map and payload until they are handed to
/// the transport; builders are never reused.
pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    method: Method,
    url: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a new request builder.
    ///
    /// The URL string is stored verbatim; parsing happens at dispatch so
    /// a malformed value surfaces as a recoverable
    /// [`HttpClientError::InvalidUrl`] instead of failing here.
    pub(crate) fn new(client: &'a HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    ///
    /// A client default header with the same name overrides this value at
    /// dispatch time.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add multiple headers to the request.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set a pre-serialized JSON payload.
    ///
    /// Stores the bytes verbatim and sets `Content-Type:
    /// application/json`; the caller is responsible for serialization.
    pub fn json_bytes(mut self, json: impl Into<Vec<u8>>) -> Self {
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(json.into());
        self
    }

    /// Serialize `json` and set it as the request payload.
    pub fn json<T: Serialize + ?Sized>(self, json: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(json).map_err(|e| HttpClientError::Json(e.to_string()))?;
        Ok(self.json_bytes(bytes))
    }

    /// Set a form-urlencoded payload.
    ///
    /// The payload is encoded with `serde_urlencoded` and labeled
    /// `Content-Type: application/x-www-form-urlencoded`.
    pub fn form<T: Serialize + ?Sized>(mut self, form: &T) -> Result<Self> {
        let encoded =
            serde_urlencoded::to_string(form).map_err(|e| HttpClientError::Form(e.to_string()))?;
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        self.body = Some(encoded.into_bytes());
        Ok(self)
    }

    /// Ask for a JSON response.
    pub fn accept_json(mut self) -> Self {
        self.headers
            .insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        self
    }

    /// Build the effective URL: base-URL prefix plus query parameters.
    ///
    /// A non-empty client base URL is prepended by plain string
    /// concatenation, not URL joining; slash hygiene between the two
    /// halves is the caller's responsibility.
    fn build_url(&self) -> Result<url::Url> {
        let raw = match self.client.config().base_url.as_deref() {
            Some(base) if !base.is_empty() => format!("{base}{}", self.url),
            _ => self.url.clone(),
        };

        let mut url =
            url::Url::parse(&raw).map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Dispatch the request and return the unprocessed transport response.
    ///
    /// Request-specific headers are applied first, then the client's
    /// default headers; a default header therefore overrides a
    /// same-named header set on this request. With verbose enabled, the
    /// exchange is traced after a successful dispatch: destination URL,
    /// outbound headers, outbound payload, then the inbound headers. The
    /// inbound body is not traced at this layer.
    pub async fn send_raw(self) -> Result<reqwest::Response> {
        let url = self.build_url()?;
        let Self {
            client,
            method,
            headers,
            body,
            ..
        } = self;
        let config = client.config();

        let mut request = reqwest::Request::new(method, url);
        *request.headers_mut() = headers;
        for (name, value) in &config.default_headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                request.headers_mut().insert(name, value);
            }
        }

        let traced_body = if config.verbose { body.clone() } else { None };
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let destination = request.url().clone();
        let outbound_headers = if config.verbose {
            Some(request.headers().clone())
        } else {
            None
        };

        let response = client.transport().execute(request).await?;

        if config.verbose {
            debug!(url = %destination, "request sent");
            if let Some(headers) = &outbound_headers {
                debug!(headers = %headers_json(headers), "request headers");
            }
            debug!(
                payload = %String::from_utf8_lossy(traced_body.as_deref().unwrap_or_default()),
                "request payload"
            );
            debug!(url = %destination, "response received");
            debug!(headers = %headers_json(response.headers()), "response headers");
        }

        Ok(response)
    }

    /// Dispatch the request and classify the result.
    ///
    /// An empty response body short-circuits to a status-only
    /// [`Response`]: 204 No Content and any other bodiless exchange
    /// resolve identically, bypassing classification. Otherwise 2xx
    /// bodies become the success payload verbatim and non-2xx bodies are
    /// decoded into an error value. Transport failures propagate as
    /// errors; a well-formed non-2xx exchange does not.
    pub async fn send(self) -> Result<Response> {
        let verbose = self.client.config().verbose;
        let raw = self.send_raw().await?;

        let status = raw.status();
        let body = raw.bytes().await?;
        if body.is_empty() {
            return Ok(Response::status_only(status));
        }

        if verbose {
            debug!(body = %String::from_utf8_lossy(&body), "response body");
        }

        Response::classify(status, body)
    }
}

/// Serialize a header map as a JSON object for trace output.
fn headers_json(headers: &HeaderMap) -> String {
    let map: serde_json::Map<String, serde_json::Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                serde_json::Value::from(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();
    serde_json::Value::Object(map).to_string()
}
