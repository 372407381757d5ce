//! subrecon - passive subdomain discovery and probing
//!
//! Pipeline per invocation:
//! - Enumerate hostnames for the target from crt.sh and rapiddns.io
//! - Probe http/https for every hostname under a global concurrency cap
//! - Inspect TLS certificates on https endpoints without validating trust
//! - Write subdomains.txt, results.json and report.html to a fresh
//!   timestamped directory

use chrono::Local;
use clap::Parser;
use console::style;
use futures::StreamExt;
use std::fs;
use std::path::PathBuf;
use subrecon::error::{ReconError, Result};
use subrecon::models::ProbeResult;
use subrecon::{fetch, output, probe, report, Cli, DiscoverySources};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = cli.normalized_target();
    if target.is_empty() {
        return Err(ReconError::InvalidTarget(cli.target.clone()));
    }

    output::print_banner();
    output::print_header(&format!("Recon: {target}"));

    let out_dir = create_output_dir(&target)?;
    let client = fetch::insecure_client()?;

    // Discovery: both sources in parallel, merged and deduplicated
    let spinner = output::create_spinner("Querying subdomain sources...");
    let discovered = DiscoverySources::default().discover(&client, &target).await;
    spinner.finish_and_clear();

    let hostnames = report::sorted_hostnames(&discovered);
    output::print_info(&format!("{} hostnames discovered", hostnames.len()));
    if hostnames.is_empty() {
        output::print_warning("no names found; the report will be empty");
    }

    // Probing: every http/https candidate through one admission gate
    let candidates = probe::expand_candidates(&hostnames);
    let bar = output::create_progress_bar(candidates.len() as u64, "Probing candidates");
    let results: Vec<ProbeResult> = probe::probe_stream(&client, candidates, cli.threads)
        .inspect(|_| bar.inc(1))
        .filter_map(|result| async move { result })
        .collect()
        .await;
    bar.finish_and_clear();

    output::print_info(&format!("{} live endpoints", results.len()));

    report::write_reports(&out_dir, &target, &hostnames, &results)?;
    output::print_success(&format!("Report written to {}", out_dir.display()));

    Ok(())
}

/// Create the fresh per-run output directory.
fn create_output_dir(target: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(format!(
        "recon_{}_{}",
        target,
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
