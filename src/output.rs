//! Terminal status output
//!
//! Styled status lines and progress indicators using console and indicatif.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the startup banner and legal notice.
pub fn print_banner() {
    println!("{}", style("subrecon").cyan().bold());
    println!(
        "{}",
        style("Passive recon tool. Audit only systems you are authorized to test.").dim()
    );
    println!();
}

/// Print a section header
pub fn print_header(message: &str) {
    println!("{}", style(message).bold());
}

/// Print an info status
pub fn print_info(message: &str) {
    println!("  {} {}", style("ℹ").cyan(), message);
}

/// Print a success status
pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

/// Print a warning status
pub fn print_warning(message: &str) {
    println!("  {} {}", style("⚠").yellow(), message);
}

/// Create a simple spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Create a progress bar for a known number of operations
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
