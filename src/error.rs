//! Unified error types for subrecon
//!
//! These cover the plumbing around the pipeline (argument validation, client
//! construction, report writing). Probe and discovery failures are never
//! surfaced through this type; they degrade to absent results at their own
//! boundary.

use thiserror::Error;

/// Main error type for subrecon operations
#[derive(Error, Debug)]
pub enum ReconError {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReconError>;
