//! rapiddns.io HTML table source

use super::{in_scope, normalize_candidate};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

// Best-effort lexical extraction, not an HTML parser. The pattern is
// deliberately simple and non-nested; the regex engine is linear-time, so
// hostile pages cannot trigger pathological scanning.
static TABLE_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<td>([\w.-]+)</td>").expect("invalid table cell pattern"));

/// Query the rapiddns.io subdomain listing for the scope.
///
/// Returns `None` when the service is unreachable or rejects the query; a
/// reachable page that happens to contain no table cells yields an empty
/// list.
pub(crate) async fn query(client: &Client, base: &str, scope: &str) -> Option<Vec<String>> {
    let url = format!("{base}/subdomain/{scope}?full=1");

    let response = client.get(&url).send().await.ok()?;
    if !response.status().is_success() {
        debug!(status = %response.status(), "rapiddns query rejected");
        return None;
    }

    let body = response.text().await.ok()?;
    Some(parse_table(&body, scope))
}

/// Extract in-scope names from table-cell markup.
fn parse_table(body: &str, scope: &str) -> Vec<String> {
    TABLE_CELL
        .captures_iter(body)
        .map(|cell| normalize_candidate(&cell[1]))
        .filter(|name| in_scope(name, scope))
        .collect()
}
