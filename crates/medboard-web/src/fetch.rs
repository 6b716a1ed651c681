//! Upstream fetch of the medicine list.

use serde_json::Value;

use crate::config::Config;
use crate::error::FetchError;

/// Issues the single GET request for the medicine list.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl Fetcher {
    /// Build a fetcher for the configured endpoint and timeout.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.fetch_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The URL this fetcher requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the list and parse it as JSON.
    ///
    /// Only HTTP-level success and JSON syntax are checked here. Whether the
    /// value is actually a list is the renderer's concern.
    pub async fn fetch_items(&self) -> Result<Value, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching medicine list");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "upstream returned error status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(FetchError::Transport)?;
        let value = serde_json::from_slice(&body)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            "medicine list fetched"
        );

        Ok(value)
    }
}
