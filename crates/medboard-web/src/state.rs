//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::loader::Loader;

/// Shared application state available to all request handlers.
///
/// Holds no per-page data: every page load builds its own container.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Page loader wrapping the upstream HTTP client.
    pub loader: Loader,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let loader = Loader::new(Fetcher::new(&config)?);

        tracing::info!(
            endpoint = %loader.fetcher().endpoint(),
            "application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            loader,
        })
    }
}
