//! JSON endpoint for the display data.
//!
//! Serves the list at `GET /medicines.json` after fallbacks are applied, for
//! programmatic consumers. Strings are plain text, not HTML-escaped.
//!
//! Format:
//! ```json
//! {
//!   "medicines": [{ "name": "...", "price": "$1.00", "description": "..." }],
//!   "summary": { "average_price": 1.0, "priced_count": 1 }
//! }
//! ```

use axum::Json;
use axum::extract::State;
use medboard_core::{DisplayItem, Item, PriceSummary};
use serde::Serialize;
use serde_json::Value;

use crate::error::{JsonError, WebError};
use crate::render;
use crate::state::AppState;

/// Response body for `/medicines.json`.
#[derive(Debug, Serialize)]
pub struct MedicinesJson {
    medicines: Vec<DisplayItem>,
    summary: Option<PriceSummary>,
}

/// Fetch the list and return its display form as JSON.
pub async fn medicines_json(
    State(state): State<AppState>,
) -> Result<Json<MedicinesJson>, JsonError> {
    let data = state.loader.fetcher().fetch_items().await?;

    let records = match data {
        Value::Array(records) => records,
        other => {
            return Err(JsonError(WebError::InvalidData(format!(
                "expected array, got {}",
                render::json_kind(&other)
            ))));
        }
    };

    let items: Vec<Item> = records.iter().map(Item::from_value).collect();

    Ok(Json(MedicinesJson {
        medicines: items.iter().map(Item::display).collect(),
        summary: PriceSummary::from_items(&items),
    }))
}
