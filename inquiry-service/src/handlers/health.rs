use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::get_metrics;
use crate::startup::AppState;

pub const LIVENESS_MESSAGE: &str = "✅ Backend running...";

/// Plain-text liveness string served at `/`.
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "inquiry-service",
        "version": env!("CARGO_PKG_VERSION"),
        "mail_enabled": state.email_provider.is_enabled(),
    }))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
