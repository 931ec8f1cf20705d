use super::error::ConversionServiceError;
use crate::domain::tts::{Speed, TtsService, TtsServiceApi, VoiceSelection};
use crate::domain::video::{ComposedVideo, VideoService, VideoServiceApi};
use async_trait::async_trait;
use std::sync::Arc;

/// One text-to-video conversion as requested by the caller
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub text: String,
    pub voice: VoiceSelection,
    pub speed: Speed,
    pub logo: Option<Vec<u8>>,
}

pub struct ConversionService {
    tts_service: Arc<TtsService>,
    video_service: Arc<VideoService>,
}

impl ConversionService {
    pub fn new(tts_service: Arc<TtsService>, video_service: Arc<VideoService>) -> Self {
        Self {
            tts_service,
            video_service,
        }
    }
}

#[async_trait]
pub trait ConversionServiceApi: Send + Sync {
    /// Convert text into a narrated MP4
    ///
    /// This operation:
    /// - Validates the text and logo
    /// - Resolves the voice, tone instruction and speaking rate
    /// - Synthesizes speech, then composes the video, sequentially
    ///
    /// Any stage failure aborts the conversion with that stage's error.
    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ComposedVideo, ConversionServiceError>;
}

#[async_trait]
impl ConversionServiceApi for ConversionService {
    async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ComposedVideo, ConversionServiceError> {
        if request.text.trim().is_empty() {
            return Err(ConversionServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let logo = match request.logo {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(ConversionServiceError::MissingLogo),
        };

        let voice = request.voice.voice_id();
        let speaking_rate = request.speed.multiplier();

        tracing::info!(
            gender = ?request.voice.gender,
            tone = ?request.voice.tone,
            voice = voice,
            speed = ?request.speed,
            speaking_rate = speaking_rate,
            text_length = request.text.len(),
            "Conversion request"
        );

        let audio = self
            .tts_service
            .synthesize(
                &request.text,
                voice,
                request.voice.tone_instruction(),
                Some(speaking_rate),
            )
            .await?;

        let video = self
            .video_service
            .compose(&audio.audio_data, &logo)
            .await?;

        Ok(video)
    }
}
