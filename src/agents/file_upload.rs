//! Upload pipeline: validate, persist, extract, cache.

use crate::extract::{self, DocumentKind};
use crate::models::AppState;
use crate::types::{AppError, AppResult};
use tracing::info;
use uuid::Uuid;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded and text extracted successfully!";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid file format. Please upload a PDF or DOCX.";

pub struct FileUploadAgent;

impl FileUploadAgent {
    /// Process one uploaded file: check the extension against the allowed
    /// set, write the bytes under a UUID-prefixed name, extract the text and
    /// overwrite the shared document slot.
    ///
    /// The extension check happens before anything touches the filesystem,
    /// so a rejected upload leaves no file behind. Accepted files are
    /// retained indefinitely.
    pub async fn process_file(
        state: &AppState,
        filename: &str,
        content: &[u8],
    ) -> AppResult<&'static str> {
        let kind = DocumentKind::from_filename(filename)
            .ok_or_else(|| AppError::InvalidRequest(INVALID_FORMAT_MESSAGE.to_string()))?;

        // UUID prefix keeps concurrent uploads of the same filename from
        // clobbering each other on disk.
        let stored_name = format!("{}_{}", Uuid::new_v4(), filename);
        let path = state.config.storage.upload_dir.join(&stored_name);

        tokio::fs::create_dir_all(&state.config.storage.upload_dir).await?;
        tokio::fs::write(&path, content).await?;
        info!(file = %stored_name, size = content.len(), "Stored uploaded file");

        let text = extract::extract(&path, kind)?;

        let mut slot = state.document.write().await;
        *slot = Some(text);

        Ok(UPLOAD_SUCCESS_MESSAGE)
    }
}
