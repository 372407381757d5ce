//! Report assembly
//!
//! Writes the three artifacts of a run into the output directory:
//! `subdomains.txt` (sorted hostnames), `results.json` (probe records) and
//! `report.html` (the same records as a table, in the same order).

mod html;

pub use html::render_html;

use crate::error::Result;
use crate::models::ProbeResult;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Sort the discovered set lexicographically for stable output.
pub fn sorted_hostnames(hostnames: &HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = hostnames.iter().cloned().collect();
    sorted.sort();
    sorted
}

/// Write the full artifact set for one run.
pub fn write_reports(
    dir: &Path,
    target: &str,
    hostnames: &[String],
    results: &[ProbeResult],
) -> Result<()> {
    fs::write(dir.join("subdomains.txt"), hostnames.join("\n"))?;
    fs::write(
        dir.join("results.json"),
        serde_json::to_string_pretty(results)?,
    )?;
    fs::write(dir.join("report.html"), render_html(target, results))?;
    Ok(())
}
