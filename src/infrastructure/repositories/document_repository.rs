use async_trait::async_trait;
use std::path::Path;

/// Plain text pulled out of a document
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub text: String,
    /// Known for paginated formats only
    pub page_count: Option<usize>,
}

/// Repository for document text extraction.
/// Abstracts the parsing library used for one family of formats.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Parse the staged file at `path` and return its full text.
    ///
    /// # Errors
    /// Returns the parser's message for corrupt or unreadable files
    async fn parse(&self, path: &Path) -> Result<ParsedDocument, String>;
}
