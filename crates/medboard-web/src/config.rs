//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Default upstream list endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/medicines";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// URL of the upstream endpoint returning the medicine list as JSON.
    pub endpoint: String,

    /// Site name shown in the page title and heading.
    pub site_name: String,

    /// Optional per-request timeout for the upstream fetch.
    /// `None` means the fetch waits for as long as the upstream takes.
    pub fetch_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            site_name: "Medicine List".to_string(),
            fetch_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `MEDBOARD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `MEDBOARD_ENDPOINT`: Upstream list URL (default: "http://localhost:8000/medicines")
    /// - `MEDBOARD_SITE_NAME`: Site name (default: "Medicine List")
    /// - `MEDBOARD_FETCH_TIMEOUT_SECS`: Upstream request timeout in seconds (default: none)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("MEDBOARD_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let endpoint = std::env::var("MEDBOARD_ENDPOINT")
            .unwrap_or(defaults.endpoint)
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("MEDBOARD_SITE_NAME").unwrap_or(defaults.site_name);

        let fetch_timeout = std::env::var("MEDBOARD_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs);

        tracing::info!(
            bind_addr = %bind_addr,
            endpoint = %endpoint,
            site_name = %site_name,
            fetch_timeout_secs = fetch_timeout.map(|d| d.as_secs()),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            endpoint,
            site_name,
            fetch_timeout,
        })
    }
}
