use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("document has {pages} pages, limit is {limit}")]
    TooLarge { pages: usize, limit: usize },
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("upload staging failed: {0}")]
    Staging(#[from] std::io::Error),
}

impl From<DocumentServiceError> for AppError {
    fn from(err: DocumentServiceError) -> Self {
        match err {
            DocumentServiceError::UnsupportedFormat(name) => AppError::UnsupportedFormat(name),
            DocumentServiceError::TooLarge { pages, limit } => {
                AppError::DocumentTooLarge { pages, limit }
            }
            DocumentServiceError::ExtractionFailed(msg) => AppError::ExtractionFailed(msg),
            DocumentServiceError::Staging(e) => AppError::Internal(e.to_string()),
        }
    }
}
