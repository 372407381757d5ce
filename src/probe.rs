//! Bounded concurrent prober
//!
//! Every discovered hostname expands into two candidate URLs (http and
//! https). All candidates across all hostnames contend for one shared
//! admission gate (`buffer_unordered`), so at most `concurrency` requests
//! are in flight process-wide. A candidate that fails at the transport
//! level is dropped silently; there is no partial-batch fatal error.

use crate::fetch;
use crate::models::ProbeResult;
use crate::tls;
use futures::stream::{self, Stream, StreamExt};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("invalid title pattern"));

/// Build the http/https candidate URLs for every hostname.
pub fn expand_candidates<I, S>(hostnames: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = Vec::new();
    for host in hostnames {
        let host = host.as_ref();
        candidates.push(format!("http://{host}"));
        candidates.push(format!("https://{host}"));
    }
    candidates
}

/// Schedule all candidates through the shared admission gate.
///
/// Yields one item per completed candidate, in completion order: `Some` for
/// a produced probe record, `None` for a dropped one. Callers that want
/// per-candidate progress hook in before filtering.
pub fn probe_stream(
    client: &Client,
    candidates: Vec<String>,
    concurrency: usize,
) -> impl Stream<Item = Option<ProbeResult>> + '_ {
    stream::iter(candidates)
        .map(move |url| probe_url(client, url))
        .buffer_unordered(concurrency.max(1))
}

/// Probe every candidate and collect the produced records.
///
/// Completion order is not deterministic; treat the result as a multiset or
/// sort before comparing.
pub async fn probe_all(
    client: &Client,
    candidates: Vec<String>,
    concurrency: usize,
) -> Vec<ProbeResult> {
    probe_stream(client, candidates, concurrency)
        .filter_map(|result| async move { result })
        .collect()
        .await
}

/// Probe a single candidate URL.
///
/// A transport failure produces no record. When the post-redirect scheme is
/// https, the certificate is inspected as well; inspection failure keeps
/// the probe record with the default TLS value rather than discarding it.
pub async fn probe_url(client: &Client, url: String) -> Option<ProbeResult> {
    let page = fetch::fetch(client, &url).await?;

    let title = extract_title(&page.body);

    let ssl = match (page.final_url.scheme(), page.final_url.host_str()) {
        ("https", Some(host)) => Some(tls::inspect(host).await),
        _ => None,
    };

    Some(ProbeResult {
        url: page.final_url.to_string(),
        status: page.status.as_u16(),
        title,
        ssl,
    })
}

/// Pull the first `<title>` element out of a page body, or `""`.
pub fn extract_title(body: &str) -> String {
    TITLE
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|title| title.as_str().trim().to_string())
        .unwrap_or_default()
}
