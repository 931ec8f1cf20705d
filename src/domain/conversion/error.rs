use crate::domain::tts::TtsServiceError;
use crate::domain::video::VideoServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ConversionServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("logo image is required")]
    MissingLogo,
    #[error(transparent)]
    Synthesis(#[from] TtsServiceError),
    #[error(transparent)]
    Composition(#[from] VideoServiceError),
}

impl From<ConversionServiceError> for AppError {
    fn from(err: ConversionServiceError) -> Self {
        match err {
            ConversionServiceError::Invalid(msg) => AppError::ValidationFailed(msg),
            ConversionServiceError::MissingLogo => AppError::MissingLogo,
            ConversionServiceError::Synthesis(e) => e.into(),
            ConversionServiceError::Composition(e) => e.into(),
        }
    }
}
