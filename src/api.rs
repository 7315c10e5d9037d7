//! Verb-and-shape convenience functions over the process-wide default client.
//!
//! Every function builds a request on the default client (see
//! [`install_default_client`](crate::install_default_client)), sends it,
//! and decodes a success body into the requested target type. A non-2xx
//! exchange is not an error; inspect [`Response::status`] and
//! [`Response::error`] on the returned value.

use std::any::{Any, TypeId};
use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::default_client;
use crate::{HttpClientError, Response, Result};

/// Decode a success body into the target type.
///
/// A `Vec<u8>` target takes the raw bytes verbatim with no JSON parse;
/// every other target is JSON-decoded.
fn decode_body<T: DeserializeOwned + 'static>(body: &Bytes) -> Result<T> {
    if TypeId::of::<T>() == TypeId::of::<Vec<u8>>() {
        let raw: Box<dyn Any> = Box::new(body.to_vec());
        return Ok(*raw.downcast::<T>().expect("target type checked above"));
    }
    serde_json::from_slice(body).map_err(|e| HttpClientError::Json(e.to_string()))
}

/// Decode the success body when one is present.
fn decode_if_present<T: DeserializeOwned + 'static>(response: &Response) -> Result<Option<T>> {
    match response.body() {
        Some(body) => Ok(Some(decode_body(body)?)),
        None => Ok(None),
    }
}

/// Send a GET request and decode the JSON response into `T`.
pub async fn get_json<T>(url: &str) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
{
    let client = default_client();
    let response = client.get(url).accept_json().send().await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a POST request with a pre-serialized JSON payload and decode the
/// JSON response into `T`.
pub async fn post_json<T>(url: &str, payload: &[u8]) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
{
    let client = default_client();
    let response = client
        .post(url)
        .json_bytes(payload)
        .accept_json()
        .send()
        .await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a PUT request with a pre-serialized JSON payload and decode the
/// JSON response into `T`.
pub async fn put_json<T>(url: &str, payload: &[u8]) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
{
    let client = default_client();
    let response = client
        .put(url)
        .json_bytes(payload)
        .accept_json()
        .send()
        .await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a PATCH request with a pre-serialized JSON payload and decode the
/// JSON response into `T`.
pub async fn patch_json<T>(url: &str, payload: &[u8]) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
{
    let client = default_client();
    let response = client
        .patch(url)
        .json_bytes(payload)
        .accept_json()
        .send()
        .await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a DELETE request with an optional JSON payload and decode the
/// response into `T` when a body comes back.
///
/// Callers that want no decoding at all can use the builder path
/// (`client.delete(url).send()`), which performs none.
pub async fn delete_json<T>(url: &str, payload: Option<&[u8]>) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
{
    let client = default_client();
    let mut request = client.delete(url);
    if let Some(payload) = payload {
        request = request.json_bytes(payload);
    }
    let response = request.accept_json().send().await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a POST request with a form-urlencoded payload and decode the JSON
/// response into `T`.
pub async fn post_form<T, F>(url: &str, form: &F) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
    F: Serialize + ?Sized,
{
    let client = default_client();
    let response = client
        .post(url)
        .form(form)?
        .accept_json()
        .send()
        .await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a PUT request with a form-urlencoded payload and decode the JSON
/// response into `T`.
pub async fn put_form<T, F>(url: &str, form: &F) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
    F: Serialize + ?Sized,
{
    let client = default_client();
    let response = client
        .put(url)
        .form(form)?
        .accept_json()
        .send()
        .await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Send a PATCH request with a form-urlencoded payload and decode the
/// JSON response into `T`.
pub async fn patch_form<T, F>(url: &str, form: &F) -> Result<(Response, Option<T>)>
where
    T: DeserializeOwned + 'static,
    F: Serialize + ?Sized,
{
    let client = default_client();
    let response = client
        .patch(url)
        .form(form)?
        .accept_json()
        .send()
        .await?;
    let decoded = decode_if_present(&response)?;
    Ok((response, decoded))
}

/// Download `url` and write the raw success body to `dest`.
///
/// No JSON semantics are applied; whatever bytes came back are written
/// verbatim (an empty file for a bodiless response). Write failures
/// propagate as [`HttpClientError::Io`].
pub async fn get_file(url: &str, dest: impl AsRef<Path>) -> Result<()> {
    let client = default_client();
    let response = client.get(url).send().await?;
    let bytes = response.into_body().unwrap_or_default();
    tokio::fs::write(dest, &bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_into_struct() {
        #[derive(serde::Deserialize)]
        struct Item {
            id: u32,
        }

        let body = Bytes::from_static(br#"{"id":3}"#);
        let item: Item = decode_body(&body).unwrap();
        assert_eq!(item.id, 3);
    }

    #[test]
    fn test_decode_body_raw_bytes_skip_json_parse() {
        let body = Bytes::from_static(b"not json at all");
        let raw: Vec<u8> = decode_body(&body).unwrap();
        assert_eq!(raw, b"not json at all");
    }

    #[test]
    fn test_decode_body_invalid_json_fails() {
        let body = Bytes::from_static(b"nope");
        let result: Result<serde_json::Value> = decode_body(&body);
        assert!(matches!(result, Err(HttpClientError::Json(_))));
    }
}
