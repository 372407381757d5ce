//! subrecon library
//!
//! Passive reconnaissance pipeline for a target domain:
//! - Subdomain discovery from public name indexes (crt.sh, rapiddns.io)
//! - Concurrent HTTP/HTTPS probing with a global admission gate
//! - TLS certificate metadata extraction without trust validation
//! - Text, JSON and HTML report generation
//!
//! # Usage
//!
//! ```rust,ignore
//! use subrecon::{discovery::DiscoverySources, fetch, probe};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = fetch::insecure_client().unwrap();
//!     let hostnames = DiscoverySources::default()
//!         .discover(&client, "example.com")
//!         .await;
//!     let candidates = probe::expand_candidates(&hostnames);
//!     let results = probe::probe_all(&client, candidates, 100).await;
//!     // Process results...
//! }
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod fetch;
pub mod models;
pub mod output;
pub mod probe;
pub mod report;
pub mod tls;

// Re-export commonly used types
pub use cli::Cli;
pub use discovery::DiscoverySources;
pub use error::{ReconError, Result};
pub use models::{ProbeResult, TlsInfo};
