//! Engine: the poll loop orchestrating fetch, validation, and delivery

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::client::HomeworkSource;
use crate::homework::{actionable_homework, status_message};
use crate::notifier::Notifier;
use crate::state::PollState;

/// The engine drives the fetch-validate-notify cycle on a fixed interval
pub struct Engine {
    source: Arc<dyn HomeworkSource>,
    notifier: Arc<dyn Notifier>,
    state: PollState,
    interval: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        source: Arc<dyn HomeworkSource>,
        notifier: Arc<dyn Notifier>,
        state: PollState,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            source,
            notifier,
            state,
            interval,
            cancel,
        }
    }

    pub fn cursor(&self) -> u64 {
        self.state.cursor()
    }

    /// Run the poll loop until cancelled. The loop never terminates on error;
    /// every failure is contained in `poll_once` and followed by the same
    /// fixed sleep as a successful iteration.
    pub async fn run(&mut self) {
        loop {
            self.poll_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Poll loop cancelled");
                    break;
                }
            }
        }
    }

    /// One fetch-validate-notify iteration with fault containment.
    ///
    /// The first failure of a streak is reported to the chat; repeats are
    /// suppressed until an iteration completes without error.
    pub async fn poll_once(&mut self) {
        if let Err(e) = self.try_iteration().await {
            tracing::error!("Iteration failed: {}", e);
            if self.state.record_failure() {
                let report = format!("Program failure: {}", e);
                if let Err(send_err) = self.notifier.notify(&report).await {
                    tracing::error!("Failed to deliver failure report: {}", send_err);
                }
            }
        }
    }

    async fn try_iteration(&mut self) -> crate::Result<()> {
        let response = self.source.fetch(self.state.cursor()).await?;

        if let Some(homework) = actionable_homework(&response)? {
            let message = status_message(homework)?;
            tracing::info!("Review status changed: {}", message);

            // Delivery is best effort; a failed send never fails the iteration.
            if let Err(e) = self.notifier.notify(&message).await {
                tracing::error!("Failed to deliver notification: {}", e);
            }
        }

        self.state.record_success(response.current_date);
        Ok(())
    }
}
