//! Tickerboard CLI - fetch live market data and refresh the dashboard HTML.
//!
//! The dashboard is a hand-authored static page; only the text content of
//! elements carrying `data-ticker`/`data-field` markers (and one sign-class
//! token) is rewritten. Structure, attributes, and whitespace survive
//! byte-for-byte.
//!
//! Usage:
//! - `tickerboard`: update index.html with live data
//! - `tickerboard --dry-run`: preview changes without writing
//!
//! Exit codes:
//! - 0: Success (including a no-op run)
//! - 1: Error (unreadable file, no data fetched)

mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tickerboard_market_data::{fetch_all, YahooProvider};
use tickerboard_refresh::Engine;

#[derive(Parser)]
#[command(
    name = "tickerboard",
    about = "Refresh the stock dashboard's figures in place",
    version
)]
struct Cli {
    /// Dashboard HTML file to update
    #[arg(long, default_value = "index.html")]
    file: PathBuf,

    /// Preview changes without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.dry_run {
        info!("DRY RUN: no files will be modified");
    }

    let config = config::reference_dashboard();

    let html = fs::read_to_string(&cli.file)
        .with_context(|| format!("HTML file not found: {}", cli.file.display()))?;

    info!("Fetching data for {} tickers", config.tickers.len());
    let provider = YahooProvider::new()?;
    let snapshots = fetch_all(&provider, &config.tickers).await;
    info!(
        "Got data for {}/{} tickers",
        snapshots.len(),
        config.tickers.len()
    );
    if snapshots.is_empty() {
        bail!("no market data fetched");
    }

    let engine = Engine::new(&config);
    let (updated, report) = engine.apply(&html, &snapshots, Local::now());
    info!(
        "Summary: {} fields updated, {} skipped (no data)",
        report.updated, report.skipped
    );

    if updated == html {
        info!("No changes detected");
        return Ok(());
    }

    if cli.dry_run {
        info!("Dry run complete, nothing written");
        return Ok(());
    }

    fs::write(&cli.file, &updated)
        .with_context(|| format!("Failed to write {}", cli.file.display()))?;
    info!("Updated {}", cli.file.display());

    Ok(())
}
