use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("no audio returned by the speech provider")]
    NoAudio,
    #[error("provider error: {0}")]
    Provider(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::ValidationFailed(msg),
            TtsServiceError::NoAudio => {
                AppError::SynthesisFailed("the speech provider returned no audio".to_string())
            }
            TtsServiceError::Provider(msg) => AppError::ProviderError(msg),
        }
    }
}
