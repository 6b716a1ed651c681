//! Medicine list page.

use axum::extract::State;
use axum::response::Response;

use crate::render::{self, Container};
use crate::state::AppState;

/// Render the medicine list.
///
/// Each request is one page load: a fresh container, one upstream fetch,
/// one render. Upstream failures are shown inside the page, so this always
/// answers 200.
pub async fn medicine_list(State(state): State<AppState>) -> Response {
    let mut container = Container::default();
    let (load_state, outcome) = state.loader.load(&mut container).await;

    tracing::debug!(state = ?load_state, "page load finished");

    let markup = render::page(
        &state.config.site_name,
        &container,
        outcome.summary().as_ref(),
    );
    super::html_response(markup)
}
