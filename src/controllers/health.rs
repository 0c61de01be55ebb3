use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::tts::TtsService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness reports whether a provider key is configured; it never calls the provider
pub async fn health_ready(State(tts_service): State<Arc<TtsService>>) -> impl IntoResponse {
    if tts_service.has_api_key() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "api_key": "configured"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "api_key": "missing"
            })),
        )
    }
}
