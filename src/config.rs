//! Configuration for the watcher

use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Main configuration structure.
///
/// The three secrets (API token, bot token, chat id) are normally left out of
/// the config file and resolved from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default)]
    pub practicum_token: String,
    #[serde(default)]
    pub telegram_token: String,
    #[serde(default)]
    pub chat_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_seconds: default_poll_interval(),
            http_timeout_seconds: default_http_timeout(),
            practicum_token: String::new(),
            telegram_token: String::new(),
            chat_id: String::new(),
        }
    }
}

impl Config {
    /// Fill empty secrets from the environment.
    ///
    /// Every missing variable is logged before returning so the operator sees
    /// the complete list, not just the first one. Any missing secret is fatal.
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        let mut missing = Vec::new();
        resolve(&mut self.practicum_token, "PRACTICUM_TOKEN", &mut missing);
        resolve(&mut self.telegram_token, "TELEGRAM_TOKEN", &mut missing);
        resolve(&mut self.chat_id, "CHAT_ID", &mut missing);

        if missing.is_empty() {
            Ok(())
        } else {
            Err(crate::WatchError::Config(format!(
                "Missing required environment variable(s): {}",
                missing.join(", ")
            )))
        }
    }
}

fn resolve(slot: &mut String, var: &'static str, missing: &mut Vec<&'static str>) {
    if !slot.is_empty() {
        return;
    }
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => *slot = value,
        _ => {
            tracing::error!("Required environment variable {} is not set", var);
            missing.push(var);
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_poll_interval() -> u64 {
    300
}

fn default_http_timeout() -> u64 {
    10
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::WatchError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
