use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Document exceeds {limit} page limit.")]
    DocumentTooLarge { pages: usize, limit: usize },

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Logo image is required")]
    MissingLogo,

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Failed to generate audio: {0}")]
    SynthesisFailed(String),

    #[error("Speech provider error: {0}")]
    ProviderError(String),

    #[error("Video generation failed: {0}")]
    EncodingFailed(String),

    #[error("Output file not found")]
    OutputMissing,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: a human readable message plus a stable error kind
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedFormat(_)
            | Self::DocumentTooLarge { .. }
            | Self::MissingLogo
            | Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::ExtractionFailed(_)
            | Self::SynthesisFailed(_)
            | Self::ProviderError(_)
            | Self::EncodingFailed(_)
            | Self::OutputMissing
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::DocumentTooLarge { .. } => "DOCUMENT_TOO_LARGE",
            Self::ExtractionFailed(_) => "EXTRACTION_FAILED",
            Self::MissingLogo => "MISSING_LOGO",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::SynthesisFailed(_) => "SYNTHESIS_FAILED",
            Self::ProviderError(_) => "PROVIDER_ERROR",
            Self::EncodingFailed(_) => "ENCODING_FAILED",
            Self::OutputMissing => "OUTPUT_MISSING",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            code = self.code(),
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Undecodable or mistyped JSON bodies are bad input, reported in the usual error shape
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationFailed(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
