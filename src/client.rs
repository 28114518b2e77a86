//! Homework review API client

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::io::HttpClient;

/// One homework entry in a statuses response
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: String,
    pub status: String,
}

/// Response from the statuses endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StatusesResponse {
    #[serde(default)]
    pub homeworks: Vec<Homework>,
    pub current_date: u64,
}

/// Trait for fetching status changes recorded after a cursor
#[async_trait]
pub trait HomeworkSource: Send + Sync + std::fmt::Debug {
    /// Fetch changes recorded after `from_date` (seconds since epoch)
    async fn fetch(&self, from_date: u64) -> crate::Result<StatusesResponse>;
}

/// Client for the homework review statuses endpoint
pub struct HomeworkClient {
    endpoint: String,
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HomeworkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeworkClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl HomeworkClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created HomeworkClient for {}", config.endpoint);
        Self {
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
            http,
        }
    }
}

#[async_trait]
impl HomeworkSource for HomeworkClient {
    async fn fetch(&self, from_date: u64) -> crate::Result<StatusesResponse> {
        let auth = format!("OAuth {}", self.token);
        let from = from_date.to_string();
        tracing::debug!("Fetching statuses with from_date={}", from);

        let response = self
            .http
            .get(
                &self.endpoint,
                &[("Authorization", auth.as_str())],
                &[("from_date", from.as_str())],
            )
            .await?;

        if response.status != 200 {
            return Err(crate::WatchError::Endpoint(format!(
                "Statuses endpoint returned {}: {}",
                response.status, response.body
            )));
        }

        let parsed: StatusesResponse = serde_json::from_str(&response.body)?;
        tracing::debug!(
            "Fetched {} homework(s), current_date={}",
            parsed.homeworks.len(),
            parsed.current_date
        );
        Ok(parsed)
    }
}
