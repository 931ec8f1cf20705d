use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("logo image is required")]
    MissingLogo,
    #[error("encoding failed: {0}")]
    Encoding(String),
    #[error("encoder finished without producing an output file")]
    OutputMissing,
    #[error("temporary file error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<VideoServiceError> for AppError {
    fn from(err: VideoServiceError) -> Self {
        match err {
            VideoServiceError::Invalid(msg) => AppError::ValidationFailed(msg),
            VideoServiceError::MissingLogo => AppError::MissingLogo,
            VideoServiceError::Encoding(msg) => AppError::EncodingFailed(msg),
            VideoServiceError::OutputMissing => AppError::OutputMissing,
            VideoServiceError::Io(e) => AppError::Internal(e.to_string()),
        }
    }
}
