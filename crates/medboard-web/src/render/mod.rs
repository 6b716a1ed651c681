//! Rendering of the medicine list into a container element.
//!
//! The [`Container`] stands in for the page element with id
//! [`CONTAINER_ID`]. It is passed explicitly to [`render`], which clears it
//! and fills it with one block per item, or with a single error block.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/). Item text goes
//! through [`medboard_core::sanitize`] before it reaches markup.

pub mod components;

use maud::{Markup, Render, html};
use medboard_core::{Item, PriceSummary};
use serde_json::Value;

use crate::error::FetchError;

/// Id of the element holding the rendered blocks.
pub const CONTAINER_ID: &str = "data-container";

/// User-visible message for a payload that is not a list.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid data format: expected a list of medicines";

/// One rendered child of the container.
#[derive(Debug, Clone)]
pub enum Block {
    /// A `div.medicine-item` for one record.
    Item(Markup),
    /// A `div.error-message` shown instead of list content.
    Error(Markup),
}

impl Block {
    fn markup(&self) -> &Markup {
        match self {
            Self::Item(m) | Self::Error(m) => m,
        }
    }
}

/// The element that holds rendered item blocks.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    blocks: Vec<Block>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(CONTAINER_ID)
    }
}

impl Container {
    /// Create an empty container with the given element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            blocks: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove all blocks.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Append a block after the existing ones.
    pub fn append(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of item blocks.
    pub fn item_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Item(_)))
            .count()
    }

    /// Number of error blocks.
    pub fn error_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Error(_)))
            .count()
    }
}

impl Render for Container {
    fn render(&self) -> Markup {
        html! {
            div id=(self.id) {
                @for block in &self.blocks {
                    (block.markup())
                }
            }
        }
    }
}

/// Result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The container holds one block per item, in input order.
    Rendered(Vec<Item>),
    /// The container holds a single error block with this message.
    Failed(String),
}

impl RenderOutcome {
    /// Price summary over the rendered items, if any carry a price.
    pub fn summary(&self) -> Option<PriceSummary> {
        match self {
            Self::Rendered(items) => PriceSummary::from_items(items),
            Self::Failed(_) => None,
        }
    }
}

/// Render a fetched payload, or a fetch failure, into `container`.
///
/// The container is cleared first. A payload that is not a JSON array is a
/// format error and is shown like a fetch failure.
pub fn render(container: &mut Container, data: &Result<Value, FetchError>) -> RenderOutcome {
    match data {
        Ok(Value::Array(records)) => {
            let items: Vec<Item> = records.iter().map(Item::from_value).collect();
            render_items(container, &items);
            RenderOutcome::Rendered(items)
        }
        Ok(other) => {
            tracing::warn!(kind = json_kind(other), "medicine list is not an array");
            render_error(container, INVALID_FORMAT_MESSAGE)
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                status = err.status(),
                source = ?std::error::Error::source(err),
                "failed to fetch medicine list"
            );
            render_error(
                container,
                &format!("Error loading medicines: {}", err.user_message()),
            )
        }
    }
}

/// Replace the container's content with one block per item.
pub fn render_items(container: &mut Container, items: &[Item]) {
    container.clear();
    for item in items {
        container.append(Block::Item(components::item_block(&item.display())));
    }
    tracing::debug!(count = items.len(), "rendered medicine items");
}

/// Replace the container's content with a single error block.
pub fn render_error(container: &mut Container, message: &str) -> RenderOutcome {
    container.clear();
    container.append(Block::Error(components::error_block(message)));
    RenderOutcome::Failed(message.to_string())
}

/// Assemble the full page around a rendered container.
pub fn page(title: &str, container: &Container, summary: Option<&PriceSummary>) -> Markup {
    let description = match summary {
        Some(summary) => summary.describe(),
        None => "Current medicine prices and descriptions.".to_string(),
    };

    let body = html! {
        (container)
        @if container.is_empty() {
            p class="empty-message" { "No medicines found." }
        }
        @if let Some(summary) = summary {
            (components::summary_line(summary))
        }
    };

    components::page_shell(title, &description, body)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medboard_core::{NO_DESCRIPTION, PRICE_UNAVAILABLE, UNKNOWN_NAME};
    use serde_json::json;

    fn html_of(container: &Container) -> String {
        container.render().into_string()
    }

    #[test]
    fn render_n_items_in_order() {
        let mut container = Container::default();
        let data = Ok(json!([
            {"name": "Aspirin", "price": 4.5, "description": "Pain relief"},
            {"name": "Ibuprofen", "price": 6, "description": "Anti-inflammatory"},
            {"name": "Zinc", "price": 2.25, "description": "Supplement"}
        ]));

        let outcome = render(&mut container, &data);

        assert_eq!(container.item_count(), 3);
        assert_eq!(container.error_count(), 0);
        assert!(matches!(outcome, RenderOutcome::Rendered(ref items) if items.len() == 3));

        let html = html_of(&container);
        let a = html.find("Aspirin").unwrap();
        let i = html.find("Ibuprofen").unwrap();
        let z = html.find("Zinc").unwrap();
        assert!(a < i && i < z);
        assert!(html.contains("Price: $6.00"));
    }

    #[test]
    fn render_empty_array() {
        let mut container = Container::default();
        let outcome = render(&mut container, &Ok(json!([])));
        assert!(container.is_empty());
        assert_eq!(outcome, RenderOutcome::Rendered(Vec::new()));
    }

    #[test]
    fn render_fallbacks() {
        let mut container = Container::default();
        let data = Ok(json!([
            {"name": null, "price": null, "description": ""}
        ]));

        render(&mut container, &data);
        let html = html_of(&container);
        assert!(html.contains(UNKNOWN_NAME));
        assert!(html.contains(PRICE_UNAVAILABLE));
        assert!(html.contains(NO_DESCRIPTION));
    }

    #[test]
    fn render_non_object_elements_still_render() {
        let mut container = Container::default();
        render(&mut container, &Ok(json!([42, "text", null])));
        assert_eq!(container.item_count(), 3);
        assert_eq!(html_of(&container).matches(UNKNOWN_NAME).count(), 3);
    }

    #[test]
    fn render_sanitizes_item_text() {
        let mut container = Container::default();
        let data = Ok(json!([
            {"name": "<img src=x onerror=alert(1)>", "price": 1, "description": "\"quoted\" & 'single'"}
        ]));

        render(&mut container, &data);
        let html = html_of(&container);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; &#39;single&#39;"));
    }

    #[test]
    fn render_object_is_format_error() {
        let mut container = Container::default();
        let outcome = render(&mut container, &Ok(json!({"medicines": []})));

        assert_eq!(container.error_count(), 1);
        assert_eq!(container.item_count(), 0);
        assert_eq!(outcome, RenderOutcome::Failed(INVALID_FORMAT_MESSAGE.to_string()));
        assert!(html_of(&container).contains("Invalid data format"));
    }

    #[test]
    fn render_fetch_error_shows_one_error_block() {
        let mut container = Container::default();
        let outcome = render(&mut container, &Err(FetchError::Status { status: 500 }));

        assert_eq!(container.blocks().len(), 1);
        assert_eq!(container.error_count(), 1);
        assert_eq!(container.item_count(), 0);
        assert!(html_of(&container).contains("HTTP error! status: 500"));
        assert!(outcome.summary().is_none());
    }

    #[test]
    fn render_parse_error_hides_parser_detail() {
        let json_err = serde_json::from_str::<Value>("<html>").unwrap_err();
        let mut container = Container::default();
        let outcome = render(&mut container, &Err(FetchError::from(json_err)));

        let html = html_of(&container);
        assert_eq!(container.error_count(), 1);
        assert!(!html.contains("line 1 column"));
        assert!(html.contains("invalid response from the medicine service"));
        assert!(matches!(outcome, RenderOutcome::Failed(ref m) if !m.contains("line 1 column")));
    }

    #[test]
    fn render_replaces_previous_content() {
        let mut container = Container::default();
        render(
            &mut container,
            &Ok(json!([{"name": "Old A"}, {"name": "Old B"}, {"name": "Old C"}])),
        );
        render(&mut container, &Ok(json!([{"name": "New"}])));

        assert_eq!(container.item_count(), 1);
        let html = html_of(&container);
        assert!(html.contains("New"));
        assert!(!html.contains("Old"));
    }

    #[test]
    fn render_success_after_error_clears_error() {
        let mut container = Container::default();
        render(&mut container, &Err(FetchError::Status { status: 502 }));
        render(&mut container, &Ok(json!([{"name": "Aspirin"}])));

        assert_eq!(container.error_count(), 0);
        assert_eq!(container.item_count(), 1);
    }

    #[test]
    fn container_renders_with_id() {
        let container = Container::new("custom-id");
        assert_eq!(container.id(), "custom-id");
        assert_eq!(html_of(&container), r#"<div id="custom-id"></div>"#);
    }

    #[test]
    fn page_wraps_container_and_summary() {
        let mut container = Container::default();
        let outcome = render(&mut container, &Ok(json!([{"name": "Aspirin", "price": 2}])));
        let html = page("Medicine List", &container, outcome.summary().as_ref()).into_string();

        assert!(html.contains(r#"<div id="data-container">"#));
        assert!(html.contains("Average price: $2.00 across 1 medicine"));
    }

    #[test]
    fn page_without_summary() {
        let mut container = Container::default();
        render(&mut container, &Err(FetchError::Status { status: 500 }));
        let html = page("Medicine List", &container, None).into_string();

        assert!(!html.contains("Average price"));
        assert!(html.contains("error-message"));
    }

    #[test]
    fn outcome_summary_over_priced_items() {
        let mut container = Container::default();
        let outcome = render(
            &mut container,
            &Ok(json!([{"price": 1}, {"price": null}, {"price": 3}])),
        );
        let summary = outcome.summary().unwrap();
        assert_eq!(summary.priced_count, 2);
    }
}
