//! Concurrent counterparts of the convenience functions.
//!
//! Each spawned variant runs its synchronous counterpart on an
//! independently scheduled tokio task and reports through a pair of
//! single-slot channels: a result channel carrying exactly what the
//! synchronous call returns, and a failure channel carrying
//! `Option<HttpClientError>`. On success the task writes the result
//! before the `None` failure marker, so draining the failure channel
//! first is always safe: once `None` arrives, the result is already
//! buffered. On failure only the failure channel is written; the result
//! sender is dropped and its receiver resolves to a receive error.
//!
//! ```rust,no_run
//! # use serde::Deserialize;
//! # #[derive(Deserialize)]
//! # struct Post { id: u32 }
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let (result, failure) = jsonfetch::spawn_get_json::<Post>("https://api.example.com/posts/1");
//! if failure.await?.is_none() {
//!     let (response, post) = result.await?;
//!     println!("status: {}", response.status());
//! }
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::oneshot;

use crate::{HttpClientError, Response, Result, api};

/// Receiver pair returned by the spawned variants: the result channel and
/// the failure channel.
pub type SpawnHandles<T> = (
    oneshot::Receiver<(Response, Option<T>)>,
    oneshot::Receiver<Option<HttpClientError>>,
);

/// Run `work` on a spawned task, delivering its outcome through a
/// (result, failure) channel pair.
///
/// The result send is sequenced before the no-failure send; a receiver
/// dropped by the caller is not an error.
fn spawn_reporting<T, F>(work: F) -> SpawnHandles<T>
where
    T: Send + 'static,
    F: Future<Output = Result<(Response, Option<T>)>> + Send + 'static,
{
    let (result_tx, result_rx) = oneshot::channel();
    let (failure_tx, failure_rx) = oneshot::channel();

    tokio::spawn(async move {
        match work.await {
            Ok(outcome) => {
                let _ = result_tx.send(outcome);
                let _ = failure_tx.send(None);
            }
            Err(err) => {
                let _ = failure_tx.send(Some(err));
            }
        }
    });

    (result_rx, failure_rx)
}

/// Run [`get_json`](crate::get_json) on a spawned task.
pub fn spawn_get_json<T>(url: &str) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let url = url.to_string();
    spawn_reporting(async move { api::get_json(&url).await })
}

/// Run [`post_json`](crate::post_json) on a spawned task.
pub fn spawn_post_json<T>(url: &str, payload: &[u8]) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let url = url.to_string();
    let payload = payload.to_vec();
    spawn_reporting(async move { api::post_json(&url, &payload).await })
}

/// Run [`put_json`](crate::put_json) on a spawned task.
pub fn spawn_put_json<T>(url: &str, payload: &[u8]) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let url = url.to_string();
    let payload = payload.to_vec();
    spawn_reporting(async move { api::put_json(&url, &payload).await })
}

/// Run [`patch_json`](crate::patch_json) on a spawned task.
pub fn spawn_patch_json<T>(url: &str, payload: &[u8]) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let url = url.to_string();
    let payload = payload.to_vec();
    spawn_reporting(async move { api::patch_json(&url, &payload).await })
}

/// Run [`delete_json`](crate::delete_json) on a spawned task.
pub fn spawn_delete_json<T>(url: &str, payload: Option<&[u8]>) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let url = url.to_string();
    let payload = payload.map(<[u8]>::to_vec);
    spawn_reporting(async move { api::delete_json(&url, payload.as_deref()).await })
}

/// Run [`post_form`](crate::post_form) on a spawned task.
pub fn spawn_post_form<T, F>(url: &str, form: F) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
    F: Serialize + Send + Sync + 'static,
{
    let url = url.to_string();
    spawn_reporting(async move { api::post_form(&url, &form).await })
}

/// Run [`put_form`](crate::put_form) on a spawned task.
pub fn spawn_put_form<T, F>(url: &str, form: F) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
    F: Serialize + Send + Sync + 'static,
{
    let url = url.to_string();
    spawn_reporting(async move { api::put_form(&url, &form).await })
}

/// Run [`patch_form`](crate::patch_form) on a spawned task.
pub fn spawn_patch_form<T, F>(url: &str, form: F) -> SpawnHandles<T>
where
    T: DeserializeOwned + Send + 'static,
    F: Serialize + Send + Sync + 'static,
{
    let url = url.to_string();
    spawn_reporting(async move { api::patch_form(&url, &form).await })
}

/// Run [`get_file`](crate::get_file) on a spawned task.
///
/// File downloads produce no result value, so only the failure channel is
/// returned; it yields `None` once the file is fully written.
pub fn spawn_get_file(
    url: &str,
    dest: impl AsRef<Path>,
) -> oneshot::Receiver<Option<HttpClientError>> {
    let url = url.to_string();
    let dest = dest.as_ref().to_path_buf();
    let (failure_tx, failure_rx) = oneshot::channel();

    tokio::spawn(async move {
        let _ = failure_tx.send(api::get_file(&url, &dest).await.err());
    });

    failure_rx
}
