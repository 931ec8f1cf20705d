use super::error::VideoServiceError;
use crate::domain::shared::{image_extension, release_all, AssetKind, AudioEncoding, TemporaryAsset};
use crate::infrastructure::repositories::{EncodeJob, VideoEncoder};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub const VIDEO_MIME_TYPE: &str = "video/mp4";

#[derive(Debug, Clone)]
pub struct ComposedVideo {
    pub video_data: Vec<u8>,
    pub mime_type: &'static str,
}

/// Stages of a single composition, logged as they are entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompositionState {
    WritingInputs,
    Encoding,
    Succeeded,
    Failed,
    CleanedUp,
}

pub struct VideoService {
    encoder: Arc<dyn VideoEncoder>,
    temp_dir: PathBuf,
}

impl VideoService {
    pub fn new(encoder: Arc<dyn VideoEncoder>, temp_dir: PathBuf) -> Self {
        Self { encoder, temp_dir }
    }

    pub async fn encoder_available(&self) -> bool {
        self.encoder.is_available().await
    }
}

#[async_trait]
pub trait VideoServiceApi: Send + Sync {
    /// Compose an MP4 from an audio track and a still image
    ///
    /// The audio, image and output files are removed before this returns,
    /// on success and on every failure path.
    async fn compose(
        &self,
        audio_bytes: &[u8],
        image_bytes: &[u8],
    ) -> Result<ComposedVideo, VideoServiceError>;
}

#[async_trait]
impl VideoServiceApi for VideoService {
    async fn compose(
        &self,
        audio_bytes: &[u8],
        image_bytes: &[u8],
    ) -> Result<ComposedVideo, VideoServiceError> {
        if audio_bytes.is_empty() {
            return Err(VideoServiceError::Invalid("Audio data is required".to_string()));
        }
        if image_bytes.is_empty() {
            return Err(VideoServiceError::MissingLogo);
        }

        let start_time = std::time::Instant::now();
        let audio_encoding = AudioEncoding::sniff(audio_bytes);

        let audio = TemporaryAsset::reserve(&self.temp_dir, AssetKind::Audio, audio_encoding.extension());
        let image = TemporaryAsset::reserve(&self.temp_dir, AssetKind::Image, image_extension(image_bytes));
        let output = TemporaryAsset::reserve(&self.temp_dir, AssetKind::Output, "mp4");

        let outcome = self
            .run(&audio, audio_bytes, &image, image_bytes, &output)
            .await;

        match &outcome {
            Ok(video) => tracing::debug!(
                state = ?CompositionState::Succeeded,
                video_size_bytes = video.video_data.len(),
                "Composition finished"
            ),
            Err(e) => tracing::debug!(
                state = ?CompositionState::Failed,
                error = %e,
                "Composition finished"
            ),
        }

        release_all(vec![audio, image, output]).await;
        tracing::debug!(state = ?CompositionState::CleanedUp, "Composition assets released");

        if let Ok(video) = &outcome {
            tracing::info!(
                audio_encoding = %audio_encoding,
                audio_size_bytes = audio_bytes.len(),
                image_size_bytes = image_bytes.len(),
                video_size_bytes = video.video_data.len(),
                latency_ms = start_time.elapsed().as_millis(),
                "Video composition completed"
            );
        }

        outcome
    }
}

impl VideoService {
    async fn run(
        &self,
        audio: &TemporaryAsset,
        audio_bytes: &[u8],
        image: &TemporaryAsset,
        image_bytes: &[u8],
        output: &TemporaryAsset,
    ) -> Result<ComposedVideo, VideoServiceError> {
        tracing::debug!(state = ?CompositionState::WritingInputs, "Writing composition inputs");
        audio.write(audio_bytes).await?;
        image.write(image_bytes).await?;

        tracing::debug!(state = ?CompositionState::Encoding, "Starting encoder");
        let job = EncodeJob {
            image_path: image.path().to_path_buf(),
            audio_path: audio.path().to_path_buf(),
            output_path: output.path().to_path_buf(),
        };
        self.encoder.encode(&job).await.map_err(|e| {
            tracing::error!(error = %e, "Encoder reported a failure");
            VideoServiceError::Encoding(e)
        })?;

        // Encoders can exit cleanly after an aborted write
        let video_data = match tokio::fs::read(output.path()).await {
            Ok(data) if !data.is_empty() => data,
            Ok(_) => return Err(VideoServiceError::OutputMissing),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VideoServiceError::OutputMissing)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(ComposedVideo {
            video_data,
            mime_type: VIDEO_MIME_TYPE,
        })
    }
}
