use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::document::{DocumentService, DocumentServiceApi},
    error::{AppError, AppResult},
};

/// Multipart field carrying the document
const FILE_FIELD: &str = "file";

/// Response for POST /api/extract-text
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    pub text: String,
}

pub struct ExtractController {
    document_service: Arc<DocumentService>,
}

impl ExtractController {
    pub fn new(document_service: Arc<DocumentService>) -> Self {
        Self { document_service }
    }

    /// POST /api/extract-text - Extract plain text from an uploaded document
    pub async fn extract_text(
        State(controller): State<Arc<ExtractController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<ExtractTextResponse>> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::ValidationFailed(format!("Invalid upload: {}", e)))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let file_name = field.file_name().unwrap_or_default().to_string();

            // Rejected by name, before any of the body is read
            let format = DocumentService::resolve_format(&file_name)?;

            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::ValidationFailed(format!("Invalid upload: {}", e)))?;

            let text = controller.document_service.extract(&bytes, format).await?;

            return Ok(Json(ExtractTextResponse { text }));
        }

        Err(AppError::ValidationFailed("No file uploaded".to_string()))
    }
}
