//! Page load: one fetch, one render.

use crate::fetch::Fetcher;
use crate::render::{self, Container, RenderOutcome};

/// Where a page load currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// The upstream request is in flight.
    Loading,
    /// The container holds the item blocks.
    Rendered { items: usize },
    /// The container holds the error block.
    ErrorShown { message: String },
}

/// Drives a single page load: fetch the list once and render it.
#[derive(Debug, Clone)]
pub struct Loader {
    fetcher: Fetcher,
}

impl Loader {
    /// Create a loader around the given fetcher.
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The fetcher used for each page load.
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Perform one page load into `container`.
    ///
    /// Issues exactly one upstream request. Returns the terminal state along
    /// with the render outcome, which carries the parsed items for callers
    /// that also want the price summary.
    pub async fn load(&self, container: &mut Container) -> (LoadState, RenderOutcome) {
        let mut state = LoadState::Idle;
        transition(&mut state, LoadState::Loading);

        let data = self.fetcher.fetch_items().await;
        let outcome = render::render(container, &data);

        let terminal = match &outcome {
            RenderOutcome::Rendered(items) => LoadState::Rendered { items: items.len() },
            RenderOutcome::Failed(message) => LoadState::ErrorShown {
                message: message.clone(),
            },
        };
        transition(&mut state, terminal);

        (state, outcome)
    }
}

fn transition(state: &mut LoadState, next: LoadState) {
    tracing::debug!(from = ?state, to = ?next, "page load state");
    *state = next;
}
