//! review-watch - Homework review status watcher
//!
//! Polls the homework review API, detects status changes, and relays
//! notifications to a Telegram chat.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod homework;
pub mod io;
pub mod notifier;
pub mod state;
pub mod status;
pub mod telegram;

pub use config::{load_config, Config};
pub use error::{Result, WatchError};

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::client::{HomeworkClient, HomeworkSource};
use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::state::PollState;
use crate::telegram::TelegramNotifier;

/// Run the watcher with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let timeout = Duration::from_secs(config.http_timeout_seconds);
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new(timeout)?);
    let cancel = CancellationToken::new();

    let source: Arc<dyn HomeworkSource> =
        Arc::new(HomeworkClient::new(&config, Arc::clone(&http)));
    let notifier: Arc<dyn Notifier> =
        Arc::new(TelegramNotifier::new(&config, Arc::clone(&http)));

    // Watch only changes recorded after process start.
    let state = PollState::new(current_epoch_secs());

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let interval = Duration::from_secs(config.poll_interval_seconds);
    let mut engine = Engine::new(source, notifier, state, interval, cancel);

    tracing::info!("Watcher started");

    // Run the poll loop (blocks until cancelled)
    engine.run().await;

    tracing::info!("Watcher stopped");

    Ok(())
}

fn current_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
