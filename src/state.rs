//! Poll loop state: cursor and failure-report bookkeeping

/// Consecutive failed iterations before a warning is logged
const ERROR_WARN_THRESHOLD: u32 = 5;

/// State owned by the poll loop.
///
/// The cursor marks the start of the next poll window. The error-notified
/// flag suppresses repeated failure reports during an unbroken outage and is
/// re-armed by every iteration that completes without error.
#[derive(Debug)]
pub struct PollState {
    cursor: u64,
    error_notified: bool,
    consecutive_errors: u32,
}

impl PollState {
    pub fn new(cursor: u64) -> Self {
        Self {
            cursor,
            error_notified: false,
            consecutive_errors: 0,
        }
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Record a successful iteration: advance the cursor to the
    /// server-reported timestamp and re-arm failure reporting.
    pub fn record_success(&mut self, current_date: u64) {
        self.cursor = current_date;
        self.error_notified = false;
        self.consecutive_errors = 0;
    }

    /// Record a failed iteration. Returns true exactly when this failure
    /// should be reported to the chat (first failure of an unbroken streak).
    pub fn record_failure(&mut self) -> bool {
        self.consecutive_errors += 1;
        if self.consecutive_errors == ERROR_WARN_THRESHOLD {
            tracing::warn!("{} consecutive failed iterations", self.consecutive_errors);
        }
        let report = !self.error_notified;
        self.error_notified = true;
        report
    }
}
