use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    controllers::payload::decode_base64_payload,
    domain::video::{ComposedVideo, VideoService, VideoServiceApi},
    error::{AppError, AppResult},
};

/// Request for POST /api/generate-video
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    #[serde(default)]
    pub audio_base64: Option<String>,
    #[serde(default)]
    pub logo_base64: Option<String>,
}

pub struct VideoController {
    video_service: Arc<VideoService>,
}

impl VideoController {
    pub fn new(video_service: Arc<VideoService>) -> Self {
        Self { video_service }
    }

    /// POST /api/generate-video - Compose an MP4 from audio and a logo
    pub async fn generate_video(
        State(controller): State<Arc<VideoController>>,
        payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload?;

        let audio = match request.audio_base64.as_deref().map(str::trim) {
            Some(encoded) if !encoded.is_empty() => decode_base64_payload(encoded)
                .map_err(|e| AppError::ValidationFailed(format!("Invalid audio data: {}", e)))?,
            _ => {
                return Err(AppError::ValidationFailed(
                    "Audio data is required".to_string(),
                ))
            }
        };

        let logo = match request.logo_base64.as_deref().map(str::trim) {
            Some(encoded) if !encoded.is_empty() => decode_base64_payload(encoded)
                .map_err(|e| AppError::ValidationFailed(format!("Invalid logo data: {}", e)))?,
            _ => return Err(AppError::MissingLogo),
        };

        tracing::info!(
            audio_size_bytes = audio.len(),
            logo_size_bytes = logo.len(),
            "Video generation request"
        );

        let video = controller.video_service.compose(&audio, &logo).await?;

        Ok(video_response(video))
    }
}

/// Binary MP4 response shared by the video and conversion endpoints
pub fn video_response(video: ComposedVideo) -> (StatusCode, HeaderMap, Body) {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(video.mime_type),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("inline; filename=\"video.mp4\""),
    );

    (StatusCode::OK, headers, Body::from(video.video_data))
}
