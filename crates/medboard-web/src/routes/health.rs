//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Public health check endpoint.
///
/// Reports only that this process is serving; the upstream is not contacted.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "medboard-web",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app_for, get};
    use axum::http::StatusCode;
    use wiremock::MockServer;

    #[tokio::test]
    async fn health_reports_ok_without_upstream_call() {
        let server = MockServer::start().await;
        let (status, content_type, body) = get(app_for(&server), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("application/json"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "medboard-web");
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
