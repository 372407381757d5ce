//! Subdomain discovery from public name indexes
//!
//! Two independent sources are queried concurrently: the crt.sh certificate
//! transparency aggregator (JSON) and the rapiddns.io subdomain listing
//! (HTML table). Each source is isolated; a source that is unreachable,
//! rate-limited or returning garbage contributes zero names and never
//! affects the other. Accepted names are normalized and deduplicated into a
//! set.

pub mod crtsh;
pub mod rapiddns;

use reqwest::Client;
use std::collections::HashSet;
use tracing::debug;

/// Discovery source endpoints.
///
/// `Default` points at the live services; tests swap the bases for local
/// mock servers so nothing depends on third-party matching rules.
#[derive(Debug, Clone)]
pub struct DiscoverySources {
    pub crtsh_base: String,
    pub rapiddns_base: String,
}

impl Default for DiscoverySources {
    fn default() -> Self {
        Self {
            crtsh_base: "https://crt.sh".to_string(),
            rapiddns_base: "https://rapiddns.io".to_string(),
        }
    }
}

impl DiscoverySources {
    /// Query both sources concurrently and merge their accepted names.
    ///
    /// An empty set is a valid outcome: both sources failing (or knowing
    /// nothing about the scope) simply produces an empty report downstream.
    pub async fn discover(&self, client: &Client, scope: &str) -> HashSet<String> {
        let (crt_names, rapid_names) = tokio::join!(
            crtsh::query(client, &self.crtsh_base, scope),
            rapiddns::query(client, &self.rapiddns_base, scope),
        );

        let mut hostnames = HashSet::new();

        match crt_names {
            Some(names) => hostnames.extend(names),
            None => debug!("crt.sh source unavailable, contributing no names"),
        }
        match rapid_names {
            Some(names) => hostnames.extend(names),
            None => debug!("rapiddns source unavailable, contributing no names"),
        }

        hostnames
    }
}

/// Lowercase a raw candidate and strip leading wildcard markers (`*.`).
pub(crate) fn normalize_candidate(raw: &str) -> String {
    let name = raw.trim().to_lowercase();
    name.trim_start_matches(['*', '.']).to_string()
}

/// Label-anchored scope check.
///
/// A name is in scope iff it equals the scope or ends with `"." + scope`.
/// Plain suffix matching is not enough: it would admit `evil-example.com`
/// for scope `example.com`.
pub(crate) fn in_scope(name: &str, scope: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name == scope || name.ends_with(&format!(".{scope}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_scope_accepts_scope_itself() {
        assert!(in_scope("example.com", "example.com"));
    }

    #[test]
    fn test_in_scope_accepts_subdomains() {
        assert!(in_scope("api.example.com", "example.com"));
        assert!(in_scope("a.b.example.com", "example.com"));
    }

    #[test]
    fn test_in_scope_rejects_lookalike_suffixes() {
        assert!(!in_scope("notexample.com", "example.com"));
        assert!(!in_scope("evil-example.com", "example.com"));
    }

    #[test]
    fn test_in_scope_rejects_empty_name() {
        assert!(!in_scope("", "example.com"));
    }

    #[test]
    fn test_normalize_candidate_lowercases() {
        assert_eq!(normalize_candidate("EXAMPLE.COM"), "example.com");
    }

    #[test]
    fn test_normalize_candidate_strips_wildcard_prefix() {
        assert_eq!(normalize_candidate("*.api.example.com"), "api.example.com");
        assert_eq!(normalize_candidate("  *.example.com "), "example.com");
    }

    #[test]
    fn test_normalized_wildcard_passes_scope_filter() {
        let name = normalize_candidate("*.EXAMPLE.COM");
        assert!(in_scope(&name, "example.com"));
    }
}
