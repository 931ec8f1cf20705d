use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::video::VideoService;

/// Collaborators the readiness probe inspects
pub struct HealthState {
    video_service: Arc<VideoService>,
    speech_configured: bool,
}

impl HealthState {
    pub fn new(video_service: Arc<VideoService>, speech_configured: bool) -> Self {
        Self {
            video_service,
            speech_configured,
        }
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let speech = if state.speech_configured {
        "configured"
    } else {
        "missing_api_key"
    };

    if state.video_service.encoder_available().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "encoder": "available",
                "tts": speech
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "encoder": "unavailable",
                "tts": speech
            })),
        )
    }
}
