//! Medboard Web - static HTML page for an upstream medicine list.
//!
//! Every page load fetches the list once from a JSON endpoint and renders it
//! into the `data-container` element, or renders an error block when the
//! fetch fails or the payload is not a list.
//!
//! # Architecture
//!
//! - **Fetch**: one HTTP GET per page load via reqwest, status and JSON checked
//! - **Render**: maud markup into an explicit [`render::Container`]
//! - **Load**: [`Loader`] ties fetch and render together and tracks page state
//!
//! # Security
//!
//! - All upstream text is escaped with [`medboard_core::sanitize`]
//! - Strict Content-Security-Policy: no JavaScript execution
//! - X-Frame-Options: DENY prevents clickjacking

pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use fetch::Fetcher;
pub use loader::{LoadState, Loader};
pub use routes::router;
pub use state::AppState;
