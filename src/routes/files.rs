use crate::agents::file_upload::FileUploadAgent;
use crate::models::AppState;
use crate::routes::error_payload;
use crate::types::{AppError, AppResult};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::info;

const NO_FILE_PART_MESSAGE: &str = "No file part";

// Raised from axum's 2 MB default; scanned PDFs routinely exceed it.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

async fn upload_file(State(state): State<AppState>, multipart: Multipart) -> Json<Value> {
    match handle_upload(&state, multipart).await {
        Ok(message) => {
            info!("File uploaded and text extracted");
            Json(json!({ "message": message }))
        }
        Err(err) => error_payload(&err),
    }
}

async fn handle_upload(state: &AppState, mut multipart: Multipart) -> AppResult<&'static str> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| AppError::InvalidRequest(NO_FILE_PART_MESSAGE.to_string()))?;
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read upload: {}", e)))?;

        return FileUploadAgent::process_file(state, &filename, &content).await;
    }

    Err(AppError::InvalidRequest(NO_FILE_PART_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LLMConfig, ServerConfig, StorageConfig};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use docx_rs::{Docx, Paragraph, Run};
    use std::fs::File;
    use std::path::Path;
    use tower::ServiceExt;

    fn test_state(upload_dir: &Path) -> AppState {
        AppState::new(Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            llm: LLMConfig {
                openrouter_api_key: String::new(),
                provider: "openrouter".to_string(),
                model: "mistralai/mistral-small-3.1-24b-instruct:free".to_string(),
                base_url: None,
            },
            storage: StorageConfig {
                upload_dir: upload_dir.to_path_buf(),
            },
        })
    }

    fn docx_bytes(text: &str) -> Vec<u8> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.docx");
        let file = File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
            .build()
            .pack(file)
            .unwrap();
        std::fs::read(&path).unwrap()
    }

    fn multipart_request(field_name: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field_name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_valid_docx_returns_message() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = router(state.clone());

        let response = app
            .oneshot(multipart_request("file", "notes.docx", &docx_bytes("Hi")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["message"],
            "File uploaded and text extracted successfully!"
        );
        assert_eq!(state.document.read().await.as_deref(), Some("Hi\n"));
    }

    #[tokio::test]
    async fn test_upload_disallowed_extension_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = router(state);

        let response = app
            .oneshot(multipart_request("file", "notes.txt", b"plain text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Invalid file format. Please upload a PDF or DOCX."
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = router(state);

        let response = app
            .oneshot(multipart_request("attachment", "notes.docx", b"ignored"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No file part");
    }

    #[tokio::test]
    async fn test_upload_corrupt_pdf_returns_generic_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let app = router(state);

        let response = app
            .oneshot(multipart_request("file", "broken.pdf", b"not a pdf"))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to extract text from the file.");
    }
}
