//! Telegram Bot API notification client

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::io::HttpClient;
use crate::notifier::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Sends messages to a fixed chat via the Telegram Bot API
pub struct TelegramNotifier {
    send_url: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        let send_url = format!(
            "{}/bot{}/sendMessage",
            TELEGRAM_API_BASE, config.telegram_token
        );

        tracing::debug!("Created TelegramNotifier for chat {}", config.chat_id);

        Self {
            send_url,
            chat_id: config.chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn type_name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> crate::Result<()> {
        let params = vec![("chat_id", self.chat_id.as_str()), ("text", text)];

        tracing::debug!("Sending Telegram message to chat {}", self.chat_id);

        let response = self.http.post_form(&self.send_url, &params).await?;

        if response.status != 200 {
            return Err(crate::WatchError::Notifier(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        tracing::debug!("Telegram message sent successfully");
        Ok(())
    }
}
