//! Resilient HTTP fetcher
//!
//! One shared `reqwest::Client` with certificate validation disabled and a
//! tight timeout envelope. `fetch` is total over any syntactically valid URL:
//! every transport failure (DNS, connect, TLS, timeout, non-HTTP listener)
//! collapses into `None` and never aborts the surrounding batch.

use crate::error::Result;
use reqwest::{redirect, Client, StatusCode, Url};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(4);
const TOTAL_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(6);
const MAX_REDIRECTS: usize = 10;

/// A fetched page after redirects.
#[derive(Debug, Clone)]
pub struct Page {
    pub final_url: Url,
    pub status: StatusCode,
    pub body: String,
}

/// Build the shared probing client.
///
/// Certificate validation is deliberately disabled: the point of probing is
/// metadata collection from self-signed, expired and otherwise misconfigured
/// hosts, not trust establishment. This is the only place in the crate where
/// that capability is switched on; any future trust-sensitive code path must
/// build its own client instead of reusing this one.
pub fn insecure_client() -> Result<Client> {
    let client = Client::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(TOTAL_TIMEOUT)
        .read_timeout(READ_TIMEOUT)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(concat!("subrecon/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Fetch a URL, returning `None` on any transport or decode failure.
///
/// The body is decoded lossily; invalid byte sequences are replaced rather
/// than rejected. No retries are attempted.
pub async fn fetch(client: &Client, url: &str) -> Option<Page> {
    let response = client.get(url).send().await.ok()?;
    let final_url = response.url().clone();
    let status = response.status();
    let bytes = response.bytes().await.ok()?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Some(Page {
        final_url,
        status,
        body,
    })
}
