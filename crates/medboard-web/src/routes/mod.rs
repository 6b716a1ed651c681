//! Route definitions for the medicine board.
//!
//! ## Routes
//!
//! - `GET /` - Medicine list page (one upstream fetch per request)
//! - `GET /medicine/{name}` - Single medicine, matched by name
//! - `GET /medicines.json` - Display data as JSON
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod health;
mod home;
mod json;
mod medicine;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use maud::Markup;

use crate::render;
use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::medicine_list))
        .route("/medicine/{name}", get(medicine::medicine_page))
        .route("/medicines.json", get(json::medicines_json))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}

/// Build an HTML response with security headers.
///
/// Pages reflect the upstream state at request time, so they are not cached.
fn html_response(markup: Markup) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    (StatusCode::OK, headers, markup.into_string()).into_response()
}
