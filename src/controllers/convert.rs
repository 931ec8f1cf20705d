use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    controllers::{payload::decode_base64_payload, video::video_response},
    domain::{
        conversion::{ConversionRequest, ConversionService, ConversionServiceApi},
        tts::{Gender, Speed, Tone, VoiceSelection},
    },
    error::{AppError, AppResult},
};

/// Request for POST /api/convert
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub logo_base64: Option<String>,
}

pub struct ConvertController {
    conversion_service: Arc<ConversionService>,
}

impl ConvertController {
    pub fn new(conversion_service: Arc<ConversionService>) -> Self {
        Self { conversion_service }
    }

    /// POST /api/convert - Narrate text and render it over a logo as MP4
    pub async fn convert(
        State(controller): State<Arc<ConvertController>>,
        payload: Result<Json<ConvertRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload?;

        let logo = match request.logo_base64.as_deref().map(str::trim) {
            Some(encoded) if !encoded.is_empty() => Some(
                decode_base64_payload(encoded)
                    .map_err(|e| AppError::ValidationFailed(format!("Invalid logo data: {}", e)))?,
            ),
            _ => None,
        };

        let video = controller
            .conversion_service
            .convert(ConversionRequest {
                text: request.text,
                voice: VoiceSelection::new(request.gender, request.tone),
                speed: request.speed,
                logo,
            })
            .await?;

        Ok(video_response(video))
    }
}
