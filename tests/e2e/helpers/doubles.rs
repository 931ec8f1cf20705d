use async_trait::async_trait;
use narrator_backend::domain::shared::AudioEncoding;
use narrator_backend::infrastructure::repositories::{
    EncodeJob, SpeechProviderError, SpeechRepository, SpeechRequest, SynthesizedAudio,
    VideoEncoder,
};
use std::sync::Mutex;

use super::fixtures::{wav_tone, PLACEHOLDER_VIDEO};

/// Speech provider returning the same WAV for every request
pub struct FixedSpeechRepository {
    audio: Vec<u8>,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FixedSpeechRepository {
    pub fn new() -> Self {
        Self {
            audio: wav_tone(0.5, 24_000),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechRepository for FixedSpeechRepository {
    async fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, SpeechProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(SynthesizedAudio {
            audio_data: self.audio.clone(),
            encoding: AudioEncoding::Wav,
        })
    }
}

/// Speech provider that always fails the same way
pub struct FailingSpeechRepository {
    no_audio: bool,
}

impl FailingSpeechRepository {
    pub fn no_audio() -> Self {
        Self { no_audio: true }
    }

    pub fn unauthorized() -> Self {
        Self { no_audio: false }
    }
}

#[async_trait]
impl SpeechRepository for FailingSpeechRepository {
    async fn synthesize(
        &self,
        _request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, SpeechProviderError> {
        if self.no_audio {
            Err(SpeechProviderError::NoAudio)
        } else {
            Err(SpeechProviderError::Transport(
                "Gemini TTS error (401): API key not valid".to_string(),
            ))
        }
    }
}

/// Encoder writing a fixed placeholder file and recording its jobs
pub struct PlaceholderEncoder {
    jobs: Mutex<Vec<EncodeJob>>,
}

impl PlaceholderEncoder {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }

    pub fn jobs(&self) -> Vec<EncodeJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoEncoder for PlaceholderEncoder {
    async fn encode(&self, job: &EncodeJob) -> Result<(), String> {
        // Inputs must exist while the encoder runs
        assert!(job.audio_path.exists(), "audio input missing during encode");
        assert!(job.image_path.exists(), "image input missing during encode");

        self.jobs.lock().unwrap().push(job.clone());
        tokio::fs::write(&job.output_path, PLACEHOLDER_VIDEO)
            .await
            .map_err(|e| e.to_string())
    }

    async fn is_available(&self) -> bool {
        true
    }
}

/// Encoder that reports a failure after leaving a partial output behind
pub struct FailingEncoder;

#[async_trait]
impl VideoEncoder for FailingEncoder {
    async fn encode(&self, job: &EncodeJob) -> Result<(), String> {
        let _ = tokio::fs::write(&job.output_path, b"partial").await;
        Err("ffmpeg exited with exit status: 1: Invalid data found when processing input".to_string())
    }

    async fn is_available(&self) -> bool {
        false
    }
}

/// Encoder that succeeds without producing any output
pub struct SilentEncoder;

#[async_trait]
impl VideoEncoder for SilentEncoder {
    async fn encode(&self, _job: &EncodeJob) -> Result<(), String> {
        Ok(())
    }

    async fn is_available(&self) -> bool {
        true
    }
}
