use super::error::TtsServiceError;
use crate::infrastructure::repositories::{
    SpeechProviderError, SpeechRepository, SpeechRequest, SynthesizedAudio,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn SpeechRepository>,
    narration_language: String,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn SpeechRepository>, narration_language: String) -> Self {
        Self {
            tts_repo,
            narration_language,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech with a prebuilt voice
    ///
    /// This operation:
    /// - Rejects text that is empty after trimming
    /// - Prepends the tone instruction to the text
    /// - Calls the speech provider once
    ///
    /// `speaking_rate` is forwarded to the provider, which may ignore it
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        tone_instruction: &str,
        speaking_rate: Option<f32>,
    ) -> Result<SynthesizedAudio, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        tone_instruction: &str,
        speaking_rate: Option<f32>,
    ) -> Result<SynthesizedAudio, TtsServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let request = SpeechRequest {
            prompt: self.build_prompt(tone_instruction, text),
            voice: voice.to_string(),
            speaking_rate,
        };

        tracing::info!(
            voice = %request.voice,
            speaking_rate = ?request.speaking_rate,
            text_length = text.len(),
            "TTS synthesis request"
        );

        let audio = self
            .tts_repo
            .synthesize(&request)
            .await
            .map_err(|e| match e {
                SpeechProviderError::NoAudio => TtsServiceError::NoAudio,
                SpeechProviderError::Transport(msg) => TtsServiceError::Provider(msg),
            })?;

        if audio.audio_data.is_empty() {
            return Err(TtsServiceError::NoAudio);
        }

        tracing::info!(
            voice = %request.voice,
            audio_size_bytes = audio.audio_data.len(),
            encoding = %audio.encoding,
            "TTS synthesis completed"
        );

        Ok(audio)
    }
}

impl TtsService {
    fn build_prompt(&self, tone_instruction: &str, text: &str) -> String {
        format!(
            "{} Read the following {} text clearly: {}",
            tone_instruction, self.narration_language, text
        )
    }
}
