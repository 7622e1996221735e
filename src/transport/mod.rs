//! HTTP plumbing for the data API.
//!
//! [`HttpClient`] is the async trait every submitter talks to.
//! [`BasicClient`] wraps `reqwest`, and [`auth::ApiKey`] layers the API key
//! header on top of any other client.

pub mod auth;
mod basic;
mod client;
#[cfg(test)]
pub(crate) mod mock;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, bail};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use tracing::debug;

/// Serializes `body` as JSON and POSTs it to `url`.
///
/// # Errors
///
/// Fails on an unparsable URL, a transport error, or any non-2xx status.
/// The status error carries the response body.
#[tracing::instrument(skip(client, body))]
pub async fn post_json<C, T>(client: &C, url: &str, body: &T) -> Result<()>
where
    C: HttpClient,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(body)?;

    let mut req = reqwest::Request::new(
        reqwest::Method::POST,
        url.parse().with_context(|| format!("invalid URL '{url}'"))?,
    );
    req.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    debug!(bytes = payload.len(), "Sending JSON payload");
    *req.body_mut() = Some(payload.into());

    let resp = client
        .execute(req)
        .await
        .with_context(|| format!("POST {url} failed"))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("POST {url} returned status {status}: {body}");
    }

    Ok(())
}
