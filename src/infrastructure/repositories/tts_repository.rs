use crate::domain::shared::AudioEncoding;
use async_trait::async_trait;

/// A single synthesis call as sent to the provider
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Tone instruction followed by the text to read
    pub prompt: String,
    /// Prebuilt provider voice
    pub voice: String,
    /// Speaking-rate multiplier, for providers that support one
    pub speaking_rate: Option<f32>,
}

/// Audio produced by the provider, in a container the encoder can probe
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub audio_data: Vec<u8>,
    pub encoding: AudioEncoding,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechProviderError {
    #[error("provider response carried no audio payload")]
    NoAudio,
    #[error("{0}")]
    Transport(String),
}

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider so it can be swapped or stubbed.
///
/// Implementations are responsible for:
/// - Provider-specific request shape and authentication
/// - Decoding the returned payload into a playable audio container
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize the prompt with the given voice. A single attempt, no retries.
    ///
    /// # Errors
    /// `NoAudio` when the provider answered without audio, `Transport` for
    /// network, authentication and HTTP status failures
    async fn synthesize(&self, request: &SpeechRequest)
        -> Result<SynthesizedAudio, SpeechProviderError>;
}
