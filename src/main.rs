//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `raw_fetch` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting (per-URL lines, summary, body files)
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use raw_fetch::initialization::init_logger_with;
use raw_fetch::{run_crawl, Config, FetchResult};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let body_dir = config.body_dir.clone();

    match run_crawl(config).await {
        Ok(report) => {
            for result in &report.results {
                print_result_line(result);
            }

            if let Some(dir) = body_dir {
                save_bodies(&dir, &report.results)?;
                println!("Bodies saved in {}", dir.display());
            }

            println!(
                "Fetched {}/{} URL{} ({} failed) in {:.1}s",
                report.successful,
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.failed,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("raw_fetch error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Prints one user-facing line per fetched URL.
fn print_result_line(result: &FetchResult) {
    match (&result.body, &result.error) {
        (Some(body), _) => {
            println!(
                "{} {} ({} bytes)",
                "ok".green().bold(),
                result.url,
                body.len()
            );
        }
        (None, Some(error)) => {
            println!("{} {} ({})", "failed".red().bold(), result.url, error);
        }
        (None, None) => {
            println!("{} {}", "failed".red().bold(), result.url);
        }
    }
}

/// Writes each fetched body into `dir`, one file per URL, named by sequence
/// id so the files sort in input order.
fn save_bodies(dir: &Path, results: &[FetchResult]) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create body directory {}", dir.display()))?;
    for result in results {
        if let Some(body) = &result.body {
            let file = dir.join(format!("{:04}.html", result.sequence_id));
            std::fs::write(&file, body)
                .with_context(|| format!("Failed to write {}", file.display()))?;
        }
    }
    Ok(())
}
