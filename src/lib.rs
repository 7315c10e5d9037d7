//! # jsonfetch
//!
//! A fluent HTTP request builder and JSON convenience layer: issue
//! GET/POST/PUT/PATCH/DELETE requests against a JSON API with minimal
//! boilerplate, optionally through a shared, pre-configured client.
//!
//! ## Features
//!
//! - **Fluent Request Building**: verb methods plus header, query,
//!   JSON, and form-urlencoded payload setters
//! - **Shared Client Defaults**: base URL prefix, default headers, and
//!   verbose exchange tracing, installable process-wide
//! - **Response Normalization**: success bodies kept verbatim, non-2xx
//!   bodies decoded into structured JSON or plain-text error values
//! - **Convenience Functions**: one call per verb and payload shape,
//!   including file download
//! - **Spawned Variants**: fire-and-report counterparts delivering
//!   through channel pairs
//! - **Pluggable Transport**: the round trip is a trait; swap in
//!   anything that can answer a request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jsonfetch::{HttpClient, HttpClientConfig, get_json, install_default_client};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Post {
//!     id: u32,
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://jsonplaceholder.typicode.com")
//!         .default_header("Accept", "application/json")
//!         .build();
//!     install_default_client(HttpClient::new(config));
//!
//!     let (response, post) = get_json::<Post>("/posts/1").await?;
//!     println!("status: {}", response.status());
//!     if let Some(post) = post {
//!         println!("title: {}", post.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Explicit Client
//!
//! ```rust,no_run
//! use jsonfetch::{HttpClient, HttpClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::builder().verbose(true).build());
//!
//!     let response = client
//!         .post("https://api.example.com/orders")
//!         .json(&serde_json::json!({"item": "widget", "quantity": 5}))?
//!         .accept_json()
//!         .send()
//!         .await?;
//!
//!     if !response.is_success() {
//!         eprintln!("rejected: {:?}", response.error());
//!     }
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod config;
mod error;
mod request;
mod response;
mod spawn;
mod transport;

pub use api::{
    delete_json, get_file, get_json, patch_form, patch_json, post_form, post_json, put_form,
    put_json,
};
pub use client::{HttpClient, default_client, install_default_client};
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::{ErrorBody, Response};
pub use spawn::{
    SpawnHandles, spawn_delete_json, spawn_get_file, spawn_get_json, spawn_patch_form,
    spawn_patch_json, spawn_post_form, spawn_post_json, spawn_put_form, spawn_put_json,
};
pub use transport::{HttpTransport, ReqwestTransport};

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use jsonfetch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        delete_json, get_file, get_json, patch_form, patch_json, post_form, post_json, put_form,
        put_json,
    };
    pub use crate::client::{HttpClient, default_client, install_default_client};
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::request::RequestBuilder;
    pub use crate::response::{ErrorBody, Response};
    pub use crate::spawn::{
        SpawnHandles, spawn_delete_json, spawn_get_file, spawn_get_json, spawn_patch_form,
        spawn_patch_json, spawn_post_form, spawn_post_json, spawn_put_form, spawn_put_json,
    };
    pub use crate::transport::{HttpTransport, ReqwestTransport};
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
