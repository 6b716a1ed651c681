//! Core types and pure helpers for the medicine board.
//!
//! This crate provides:
//! - The [`Item`] record and its lenient reading from JSON values
//! - Display derivation with fallback text for missing fields
//! - Price formatting and the [`PriceSummary`] aggregate
//! - The HTML [`sanitize`] function used before any text reaches markup
//!
//! Nothing here performs I/O; fetching and page rendering live in
//! `medboard-web`.

mod item;
mod sanitize;
mod summary;

// ═══════════════════════════════════════════════════════════════════════════
// Fallback text
// ═══════════════════════════════════════════════════════════════════════════

/// Shown when an item has no usable name.
pub const UNKNOWN_NAME: &str = "Unknown Medicine";

/// Shown when an item has no price.
pub const PRICE_UNAVAILABLE: &str = "Price not available";

/// Shown when an item has no usable description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Currency prefix for formatted prices.
pub const CURRENCY_PREFIX: &str = "$";

pub use item::{DisplayItem, Item, format_price};
pub use sanitize::sanitize;
pub use summary::PriceSummary;
