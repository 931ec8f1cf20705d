use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document formats accepted for text extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
}

impl DocumentFormat {
    /// Parse a file extension, with or without the leading dot, case-insensitive
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "doc" => Some(DocumentFormat::Doc),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    /// Detect the format from an uploaded file name
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Docx => "docx",
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, DocumentFormat::Doc | DocumentFormat::Docx)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Per-format page ceiling. Word documents are not page-limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub pdf: Option<usize>,
    pub doc: Option<usize>,
    pub docx: Option<usize>,
}

pub const DEFAULT_PDF_PAGE_LIMIT: usize = 25;

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            pdf: Some(DEFAULT_PDF_PAGE_LIMIT),
            doc: None,
            docx: None,
        }
    }
}

impl PageLimits {
    pub fn with_pdf_limit(limit: usize) -> Self {
        Self {
            pdf: Some(limit),
            ..Self::default()
        }
    }

    pub fn limit_for(&self, format: DocumentFormat) -> Option<usize> {
        match format {
            DocumentFormat::Pdf => self.pdf,
            DocumentFormat::Doc => self.doc,
            DocumentFormat::Docx => self.docx,
        }
    }

    /// Returns the violated limit when `page_count` is above it
    pub fn exceeded(&self, format: DocumentFormat, page_count: usize) -> Option<usize> {
        self.limit_for(format).filter(|limit| page_count > *limit)
    }
}
