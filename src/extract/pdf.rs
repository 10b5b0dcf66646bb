//! PDF text extraction via `lopdf`.

use crate::types::{AppError, AppResult};
use lopdf::Document;
use std::path::Path;

/// Extract the text of every page in document order, concatenated with no
/// separator. A page with no extractable text (e.g. a scanned image-only
/// page) fails the whole extraction, so the caller never caches a document
/// with silently missing pages.
pub fn extract(path: &Path) -> AppResult<String> {
    let doc = Document::load(path)
        .map_err(|e| AppError::Extraction(format!("failed to load PDF: {}", e)))?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        let page_text = doc
            .extract_text(&[page_num])
            .map_err(|e| AppError::Extraction(format!("page {}: {}", page_num, e)))?;

        if page_text.trim().is_empty() {
            return Err(AppError::Extraction(format!(
                "page {} has no extractable text",
                page_num
            )));
        }

        text.push_str(&page_text);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a PDF on disk with one page per entry in `pages`. An empty
    /// string produces a page with no text operations.
    fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let mut operations = Vec::new();
            if !page_text.is_empty() {
                operations.extend([
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ]);
            }
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_extracts_single_page_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.pdf");
        write_pdf(&path, &["Hello World"]);

        let text = extract(&path).unwrap();
        assert!(text.contains("Hello World"), "got: {:?}", text);
    }

    #[test]
    fn test_concatenates_pages_in_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.pdf");
        write_pdf(&path, &["Alpha", "Beta"]);

        let text = extract(&path).unwrap();
        let alpha = text.find("Alpha").expect("first page text missing");
        let beta = text.find("Beta").expect("second page text missing");
        assert!(alpha < beta, "pages out of order: {:?}", text);
    }

    #[test]
    fn test_page_without_text_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imageonly.pdf");
        write_pdf(&path, &["Alpha", ""]);

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_invalid_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = extract(&path).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
