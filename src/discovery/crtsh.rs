//! crt.sh certificate transparency source

use super::{in_scope, normalize_candidate};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// A single certificate row from the crt.sh JSON API.
///
/// `name_value` carries one or more SAN-style names separated by newlines.
#[derive(Debug, Deserialize)]
struct CrtShRow {
    #[serde(default)]
    name_value: String,
}

/// Query crt.sh for certificates matching the scope.
///
/// The `Identity=%25<scope>` form is the wildcard query the service
/// currently accepts (`q=%25.` style queries started returning 403).
/// Returns `None` when the service is unreachable, rejects the query or
/// returns a body that is not the expected JSON array.
pub(crate) async fn query(client: &Client, base: &str, scope: &str) -> Option<Vec<String>> {
    let url = format!("{base}/?Identity=%25{scope}&output=json");

    let response = client.get(&url).send().await.ok()?;
    if !response.status().is_success() {
        debug!(status = %response.status(), "crt.sh query rejected");
        return None;
    }

    let body = response.text().await.ok()?;
    parse_rows(&body, scope)
}

/// Extract in-scope names from a crt.sh JSON body.
fn parse_rows(body: &str, scope: &str) -> Option<Vec<String>> {
    if body.trim().is_empty() {
        return Some(Vec::new());
    }

    let rows: Vec<CrtShRow> = serde_json::from_str(body).ok()?;

    let names = rows
        .iter()
        .flat_map(|row| row.name_value.lines())
        .map(normalize_candidate)
        .filter(|name| in_scope(name, scope))
        .collect();

    Some(names)
}
