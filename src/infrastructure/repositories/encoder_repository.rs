use async_trait::async_trait;
use std::path::PathBuf;

/// Inputs and output location for one still-image + audio encode
#[derive(Debug, Clone)]
pub struct EncodeJob {
    pub image_path: PathBuf,
    pub audio_path: PathBuf,
    pub output_path: PathBuf,
}

/// External encoder turning a still image and an audio track into an MP4.
///
/// Implementations loop the image for exactly the audio's duration and write
/// the result to `output_path`. They never delete any of the job's files.
#[async_trait]
pub trait VideoEncoder: Send + Sync {
    /// Run the encode to completion.
    ///
    /// # Errors
    /// Returns the encoder's diagnostic text when it reports a failure
    async fn encode(&self, job: &EncodeJob) -> Result<(), String>;

    /// Whether the encoder can be launched at all
    async fn is_available(&self) -> bool;
}
