//! The medicine record and its display form.

use serde::Serialize;
use serde_json::Value;

use crate::{CURRENCY_PREFIX, NO_DESCRIPTION, PRICE_UNAVAILABLE, UNKNOWN_NAME};

/// One medicine record as received from the upstream list.
///
/// Every field is optional. Upstream data is not trusted to be well-formed,
/// so records are read with [`Item::from_value`], which never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    /// Medicine name.
    pub name: Option<String>,
    /// Unit price.
    pub price: Option<f64>,
    /// Free-form description.
    pub description: Option<String>,
}

impl Item {
    /// Read an item from an arbitrary JSON value.
    ///
    /// - `name` / `description` are taken only when they are JSON strings.
    /// - `price` is taken from a JSON number, or from a string holding a
    ///   finite number.
    /// - Anything that is not an object yields an item with every field absent.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        let price = match obj.get("price") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|p| p.is_finite());

        Self {
            name: text("name"),
            price,
            description: text("description"),
        }
    }

    /// Whether this item's name matches `query`, ignoring case and
    /// surrounding whitespace.
    pub fn name_matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name
            .as_deref()
            .is_some_and(|name| !query.is_empty() && name.trim().to_lowercase() == query)
    }

    /// Derive the strings shown for this item, substituting fallbacks.
    pub fn display(&self) -> DisplayItem {
        DisplayItem {
            name: non_blank(self.name.as_deref()).unwrap_or(UNKNOWN_NAME).to_string(),
            price: self
                .price
                .map(format_price)
                .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string()),
            description: non_blank(self.description.as_deref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
        }
    }
}

/// Display strings for one item, after fallbacks are applied.
///
/// These are plain text. They must be passed through [`crate::sanitize`]
/// before being placed into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub name: String,
    pub price: String,
    pub description: String,
}

/// Format a price with the currency prefix and two decimal places.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_PREFIX}{price:.2}")
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
