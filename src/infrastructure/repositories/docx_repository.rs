//! Word text extraction from the OOXML container.
//!
//! The body lives in `word/document.xml`; text runs (`w:t`) are collected per
//! paragraph (`w:p`) and paragraphs are separated by a blank line.

use super::document_repository::{DocumentRepository, ParsedDocument};
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Default)]
pub struct DocxRepository;

impl DocxRepository {
    pub fn new() -> Self {
        Self
    }
}

fn read_document_part(path: &Path) -> Result<String, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open document: {}", e))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| format!("Not a valid Word document (OOXML expected): {}", e))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("Word document has no body part: {}", e))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| format!("Failed to read document body: {}", e))?;

    Ok(xml)
}

/// Convert the WordprocessingML body to raw text
pub fn document_xml_to_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            // Tab stops in paragraph properties are also `w:tab`; only runs count
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" if in_run => current.push('\t'),
                b"w:br" | b"w:cr" if in_run => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n\n").trim_end().to_string())
}

fn extract_docx_text(path: &Path) -> Result<ParsedDocument, String> {
    let xml = read_document_part(path)?;
    let text =
        document_xml_to_text(&xml).map_err(|e| format!("Malformed document body: {}", e))?;

    Ok(ParsedDocument {
        text,
        page_count: None,
    })
}

#[async_trait]
impl DocumentRepository for DocxRepository {
    async fn parse(&self, path: &Path) -> Result<ParsedDocument, String> {
        let path: PathBuf = path.to_path_buf();

        let parsed = tokio::task::spawn_blocking(move || extract_docx_text(&path))
            .await
            .map_err(|e| format!("Word parser task failed: {}", e))??;

        tracing::debug!(text_length = parsed.text.len(), "Word document parsed");

        Ok(parsed)
    }
}
