//! Error types for the watcher

/// Errors that can occur while watching review statuses
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Endpoint error: {0}")]
    Endpoint(String),

    #[error("Undocumented homework status: {0}")]
    UnknownStatus(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Notifier error: {0}")]
    Notifier(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;
