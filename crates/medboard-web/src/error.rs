//! Error types for fetching and serving the medicine list.
//!
//! Fetch failures on the main page never become HTTP errors: they are shown
//! in the container's error block. [`WebError`] covers the routes that do
//! answer with a non-200 status, rendered as small HTML error pages (or JSON
//! through [`JsonError`]).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};
use serde::Serialize;

/// Failure of the single upstream request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read
    /// (connection refused, DNS failure, timeout, reset).
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The body was not valid JSON.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code of the upstream response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }

    /// Message safe to show on the page.
    ///
    /// Never includes the upstream URL or parser positions; those go to the
    /// log only.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "could not reach the medicine service".to_string(),
            Self::Status { status } => format!("HTTP error! status: {status}"),
            Self::Parse(_) => "invalid response from the medicine service".to_string(),
        }
    }
}

/// Error type for HTTP routes.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// No medicine matched the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The upstream request failed.
    #[error("upstream error: {0}")]
    Upstream(#[from] FetchError),

    /// The upstream answered with JSON that is not a list.
    #[error("invalid data format: {0}")]
    InvalidData(String),
}

impl WebError {
    /// Status, title, and user-facing message for this error.
    ///
    /// Diagnostic detail is logged here and kept out of the message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::NotFound(name) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("No medicine named \"{name}\" was found."),
            ),
            Self::Upstream(err) => {
                tracing::error!(error = %err, status = err.status(), "upstream fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream Unavailable",
                    "The medicine list could not be loaded. Please try again later.".to_string(),
                )
            }
            Self::InvalidData(detail) => {
                tracing::error!(detail = %detail, "upstream returned unexpected data");
                (
                    StatusCode::BAD_GATEWAY,
                    "Invalid Data",
                    "The medicine list has an invalid data format.".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = self.parts();

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to the medicine list" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// Wrapper that renders a [`WebError`] as JSON instead of HTML.
#[derive(Debug)]
pub struct JsonError(pub WebError);

impl From<FetchError> for JsonError {
    fn from(err: FetchError) -> Self {
        Self(WebError::Upstream(err))
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let code = match &self.0 {
            WebError::NotFound(_) => "not_found",
            WebError::Upstream(_) => "upstream_error",
            WebError::InvalidData(_) => "invalid_data",
        };
        let (status, _, message) = self.0.parts();
        (
            status,
            Json(ErrorBody {
                error: code,
                message,
            }),
        )
            .into_response()
    }
}
