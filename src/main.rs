use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use kakaku_watcher::utils::logging;
use kakaku_watcher::{AppConfig, PriceChecker};

/// Check monitored product prices once and report the result over LINE.
#[derive(Debug, Parser)]
#[command(name = "kakaku-watcher", version, about)]
struct Cli {
    /// TOML settings file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Price snapshot file, overriding `store.path`
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Fetch and diff, then print the message instead of saving and sending it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env(cli.config.as_deref())?;
    if let Some(state_file) = cli.state_file {
        config.store.path = state_file;
    }

    info!("Starting price check with snapshot {}", config.store.path.display());

    let report = PriceChecker::from_config(&config)?
        .with_dry_run(cli.dry_run)
        .run()
        .await?;

    if cli.dry_run {
        println!("{}", report.message);
    }

    Ok(())
}
