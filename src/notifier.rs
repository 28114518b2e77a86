//! Notifier trait for delivering chat messages

use async_trait::async_trait;

/// Trait for delivering a text message to the configured chat
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Deliver a message
    async fn notify(&self, text: &str) -> crate::Result<()>;
}
