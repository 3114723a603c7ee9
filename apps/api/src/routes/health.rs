use axum::Json;
use serde::Serialize;

/// Liveness payload. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// GET /health
/// Returns `{"status":"ok"}` whenever the process can answer HTTP.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
