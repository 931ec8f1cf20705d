use super::error::DocumentServiceError;
use super::format::{DocumentFormat, PageLimits};
use crate::domain::shared::{release_all, AssetKind, TemporaryAsset};
use crate::infrastructure::repositories::{DocumentRepository, ParsedDocument};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub struct DocumentService {
    pdf_repo: Arc<dyn DocumentRepository>,
    word_repo: Arc<dyn DocumentRepository>,
    upload_dir: PathBuf,
    page_limits: PageLimits,
}

impl DocumentService {
    pub fn new(
        pdf_repo: Arc<dyn DocumentRepository>,
        word_repo: Arc<dyn DocumentRepository>,
        upload_dir: PathBuf,
        page_limits: PageLimits,
    ) -> Self {
        Self {
            pdf_repo,
            word_repo,
            upload_dir,
            page_limits,
        }
    }

    /// Resolve the declared format of an upload from its file name
    pub fn resolve_format(file_name: &str) -> Result<DocumentFormat, DocumentServiceError> {
        DocumentFormat::from_file_name(file_name)
            .ok_or_else(|| DocumentServiceError::UnsupportedFormat(file_name.to_string()))
    }
}

#[async_trait]
pub trait DocumentServiceApi: Send + Sync {
    /// Extract plain text from an uploaded document
    ///
    /// This operation:
    /// - Stages the bytes as a request-scoped upload file
    /// - Parses the file with the repository for its format
    /// - Removes the staged file, whatever the outcome
    /// - Enforces the page ceiling for the format
    async fn extract(
        &self,
        file_bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<String, DocumentServiceError>;
}

#[async_trait]
impl DocumentServiceApi for DocumentService {
    async fn extract(
        &self,
        file_bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<String, DocumentServiceError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            format = %format,
            size_bytes = file_bytes.len(),
            "Text extraction request"
        );

        let upload = TemporaryAsset::reserve(&self.upload_dir, AssetKind::Upload, format.extension());
        let outcome = self.parse_staged(&upload, file_bytes, format).await;
        release_all(vec![upload]).await;

        let parsed = outcome?;
        self.enforce_page_limit(format, &parsed)?;

        tracing::info!(
            format = %format,
            page_count = ?parsed.page_count,
            text_length = parsed.text.len(),
            latency_ms = start_time.elapsed().as_millis(),
            "Text extraction completed"
        );

        Ok(parsed.text)
    }
}

impl DocumentService {
    async fn parse_staged(
        &self,
        upload: &TemporaryAsset,
        file_bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<ParsedDocument, DocumentServiceError> {
        upload.write(file_bytes).await?;

        let repo = if format.is_word() {
            &self.word_repo
        } else {
            &self.pdf_repo
        };

        repo.parse(upload.path()).await.map_err(|e| {
            tracing::error!(format = %format, error = %e, "Document parsing failed");
            DocumentServiceError::ExtractionFailed(e)
        })
    }

    fn enforce_page_limit(
        &self,
        format: DocumentFormat,
        parsed: &ParsedDocument,
    ) -> Result<(), DocumentServiceError> {
        let Some(pages) = parsed.page_count else {
            return Ok(());
        };

        match self.page_limits.exceeded(format, pages) {
            Some(limit) => {
                tracing::warn!(
                    format = %format,
                    pages = pages,
                    limit = limit,
                    "Document rejected: page limit exceeded"
                );
                Err(DocumentServiceError::TooLarge { pages, limit })
            }
            None => Ok(()),
        }
    }
}
