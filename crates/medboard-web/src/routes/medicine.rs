//! Single medicine page.
//!
//! Handles `GET /medicine/{name}`. The upstream only serves the full list, so
//! the list is fetched and the first case-insensitive name match is shown.

use axum::extract::{Path, State};
use axum::response::Response;
use medboard_core::Item;
use serde_json::Value;

use crate::error::WebError;
use crate::render::{self, Container};
use crate::state::AppState;

/// Render one medicine by name.
pub async fn medicine_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let data = state.loader.fetcher().fetch_items().await?;

    let records = match data {
        Value::Array(records) => records,
        other => {
            return Err(WebError::InvalidData(format!(
                "expected array, got {}",
                render::json_kind(&other)
            )));
        }
    };

    let item = records
        .iter()
        .map(Item::from_value)
        .find(|item| item.name_matches(&name))
        .ok_or_else(|| WebError::NotFound(name.trim().to_string()))?;

    tracing::debug!(name = %name, "medicine found");

    let mut container = Container::default();
    render::render_items(&mut container, std::slice::from_ref(&item));

    let title = format!("{} | {}", item.display().name, state.config.site_name);
    let markup = render::page(&title, &container, None);
    Ok(super::html_response(markup))
}
