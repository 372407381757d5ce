//! Discovery aggregator tests against mocked sources.
//!
//! Nothing here touches the live crt.sh or rapiddns.io services; both
//! endpoints are swapped for local mock servers.

use subrecon::{fetch, DiscoverySources};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_crtsh(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

async fn mock_rapiddns(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subdomain/example.com"))
        .and(query_param("full", "1"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn sources(crtsh: &MockServer, rapiddns: &MockServer) -> DiscoverySources {
    DiscoverySources {
        crtsh_base: crtsh.uri(),
        rapiddns_base: rapiddns.uri(),
    }
}

fn sorted(hostnames: std::collections::HashSet<String>) -> Vec<String> {
    let mut names: Vec<String> = hostnames.into_iter().collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_merges_both_sources_and_filters_scope() {
    let crtsh = mock_crtsh(200, r#"[{"name_value": "a.example.com\nb.example.com"}]"#).await;
    let rapiddns = mock_rapiddns(
        200,
        "<table><tr><td>b.example.com</td><td>c.other.com</td></tr></table>",
    )
    .await;
    let client = fetch::insecure_client().unwrap();

    let hostnames = sources(&crtsh, &rapiddns)
        .discover(&client, "example.com")
        .await;

    // c.other.com is out of scope; b.example.com deduplicates across sources
    assert_eq!(sorted(hostnames), vec!["a.example.com", "b.example.com"]);
}

#[tokio::test]
async fn test_same_name_from_both_sources_appears_once() {
    let crtsh = mock_crtsh(200, r#"[{"name_value": "www.example.com"}]"#).await;
    let rapiddns = mock_rapiddns(200, "<td>www.example.com</td>").await;
    let client = fetch::insecure_client().unwrap();

    let hostnames = sources(&crtsh, &rapiddns)
        .discover(&client, "example.com")
        .await;

    assert_eq!(sorted(hostnames), vec!["www.example.com"]);
}

#[tokio::test]
async fn test_garbage_json_does_not_affect_other_source() {
    let crtsh = mock_crtsh(200, "<html>definitely not json</html>").await;
    let rapiddns = mock_rapiddns(200, "<td>live.example.com</td>").await;
    let client = fetch::insecure_client().unwrap();

    let hostnames = sources(&crtsh, &rapiddns)
        .discover(&client, "example.com")
        .await;

    assert_eq!(sorted(hostnames), vec!["live.example.com"]);
}

#[tokio::test]
async fn test_rejected_source_does_not_affect_other_source() {
    let crtsh = mock_crtsh(200, r#"[{"name_value": "a.example.com"}]"#).await;
    let rapiddns = mock_rapiddns(500, "internal error").await;
    let client = fetch::insecure_client().unwrap();

    let hostnames = sources(&crtsh, &rapiddns)
        .discover(&client, "example.com")
        .await;

    assert_eq!(sorted(hostnames), vec!["a.example.com"]);
}

#[tokio::test]
async fn test_unreachable_source_does_not_affect_other_source() {
    let rapiddns = mock_rapiddns(200, "<td>only.example.com</td>").await;
    let client = fetch::insecure_client().unwrap();

    // Nothing listens on port 1
    let sources = DiscoverySources {
        crtsh_base: "http://127.0.0.1:1".to_string(),
        rapiddns_base: rapiddns.uri(),
    };
    let hostnames = sources.discover(&client, "example.com").await;

    assert_eq!(sorted(hostnames), vec!["only.example.com"]);
}

#[tokio::test]
async fn test_forbidden_crtsh_response_contributes_nothing() {
    let crtsh = mock_crtsh(403, "rate limited").await;
    let rapiddns = mock_rapiddns(200, "<td>x.example.com</td>").await;
    let client = fetch::insecure_client().unwrap();

    let hostnames = sources(&crtsh, &rapiddns)
        .discover(&client, "example.com")
        .await;

    assert_eq!(sorted(hostnames), vec!["x.example.com"]);
}

#[tokio::test]
async fn test_both_sources_empty_is_a_valid_outcome() {
    let crtsh = mock_crtsh(200, "[]").await;
    let rapiddns = mock_rapiddns(200, "<html><body>nothing</body></html>").await;
    let client = fetch::insecure_client().unwrap();

    let hostnames = sources(&crtsh, &rapiddns)
        .discover(&client, "example.com")
        .await;

    assert!(hostnames.is_empty());
}
