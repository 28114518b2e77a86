//! review-watch CLI
//!
//! Command-line interface for the homework review status watcher.

use std::path::PathBuf;

use clap::Parser;
use review_watch::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "review-watch")]
#[command(about = "Homework review status watcher and Telegram notifier")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll interval in seconds (overrides config file)
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.resolve_secrets()?;

    if let Some(poll_interval) = args.poll_interval {
        config.poll_interval_seconds = poll_interval;
    }

    tracing::info!("Starting review-watch");
    tracing::debug!(
        "Endpoint: {}, poll interval: {}s, timeout: {}s",
        config.endpoint,
        config.poll_interval_seconds,
        config.http_timeout_seconds
    );

    review_watch::run(config).await?;

    Ok(())
}
