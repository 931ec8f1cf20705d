//! PDF text extraction backed by MuPDF.
//!
//! MuPDF documents are not `Send`, so each parse opens its own document on a
//! blocking worker thread and never lets it cross an await point.

use super::document_repository::{DocumentRepository, ParsedDocument};
use async_trait::async_trait;
use mupdf::Document;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MupdfPdfRepository;

impl MupdfPdfRepository {
    pub fn new() -> Self {
        Self
    }
}

fn extract_pdf_text(path: &Path) -> Result<ParsedDocument, mupdf::Error> {
    let path_str = path.to_string_lossy();
    let doc = Document::open(&*path_str)?;
    let page_count = doc.page_count()?;

    let mut pages = Vec::with_capacity(page_count.max(0) as usize);
    for page_no in 0..page_count {
        let page = doc.load_page(page_no)?;
        pages.push(page.to_text()?);
    }

    Ok(ParsedDocument {
        text: pages.join("\n"),
        page_count: Some(pages.len()),
    })
}

#[async_trait]
impl DocumentRepository for MupdfPdfRepository {
    async fn parse(&self, path: &Path) -> Result<ParsedDocument, String> {
        let path: PathBuf = path.to_path_buf();

        let parsed = tokio::task::spawn_blocking(move || extract_pdf_text(&path))
            .await
            .map_err(|e| format!("PDF parser task failed: {}", e))?
            .map_err(|e| format!("Failed to read PDF: {}", e))?;

        tracing::debug!(
            page_count = ?parsed.page_count,
            text_length = parsed.text.len(),
            "PDF parsed"
        );

        Ok(parsed)
    }
}
