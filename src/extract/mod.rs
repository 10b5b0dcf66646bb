//! Document text extraction
//!
//! Converts an uploaded PDF or DOCX file into plain text. No OCR, no layout
//! or table awareness; the underlying parsers decide what text is available.

pub mod docx;
pub mod pdf;

use crate::types::AppResult;
use std::path::Path;

/// Supported document formats, derived from the lowercased filename
/// extension. Doubles as the upload allow-list: anything this does not
/// recognize is rejected before touching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Kind for a full filename, e.g. `report.PDF` -> `Pdf`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

pub fn extract(path: &Path, kind: DocumentKind) -> AppResult<String> {
    match kind {
        DocumentKind::Pdf => pdf::extract(path),
        DocumentKind::Docx => docx::extract(path),
    }
}
