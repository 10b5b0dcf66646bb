//! DOCX text extraction via `docx-rs`.

use crate::types::{AppError, AppResult};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::path::Path;

/// Extract paragraph text in document order, each paragraph followed by a
/// newline. Empty paragraphs contribute a bare newline.
pub fn extract(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path)?;
    let docx = read_docx(&bytes)
        .map_err(|e| AppError::Extraction(format!("failed to parse DOCX: {}", e)))?;

    let mut text = String::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            for para_child in para.children.iter() {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in run.children.iter() {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}
