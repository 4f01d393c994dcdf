//! Document text extraction for uploaded résumés (PDF and DOCX).
//!
//! The parsing libraries are CPU-bound and may panic on hostile input, so
//! extraction runs on the blocking pool and a panic surfaces as an error.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use bytes::Bytes;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("extraction task failed: {0}")]
    Task(String),

    #[error("document contains no extractable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub const SUPPORTED: &'static str = "pdf, docx";

    /// Decides by file extension only.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extracts and normalizes the text of a document.
pub async fn extract_text(kind: DocumentKind, data: Bytes) -> Result<String, ExtractError> {
    let raw = tokio::task::spawn_blocking(move || match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        DocumentKind::Docx => docx_text(&data),
    })
    .await
    .map_err(|e| ExtractError::Task(e.to_string()))??;

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

fn docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    Ok(docx_xml_to_text(&xml))
}

static XML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Flattens WordprocessingML: paragraphs and breaks become newlines, tabs
/// become tabs, every other tag is dropped.
fn docx_xml_to_text(xml: &str) -> String {
    let marked = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:tab/>", "\t");
    let stripped = XML_TAG_RE.replace_all(&marked, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Trims every line and collapses runs of blank lines to one.
fn normalize_whitespace(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Cuts `text` to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
