//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/` - Landing page
//! - `/login` - Login form (no real authentication, accepts any credentials)
//! - `/home` - Upload-and-ask page
//! - `/upload` - Multipart document upload
//! - `/ask` - Question answering against the uploaded document
//! - `/health` - Health check

pub mod ask;
pub mod files;
pub mod health;
pub mod ui;

use crate::models::AppState;
use crate::types::AppError;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(ui::router())
        .merge(files::router(state.clone()))
        .merge(ask::router(state))
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}

/// Convert a handler failure into the uniform `{error}` payload. The client
/// gets a fixed message per error class; the underlying cause only goes to
/// the logs.
pub(crate) fn error_payload(err: &AppError) -> Json<Value> {
    match err {
        AppError::InvalidRequest(_) => warn!(error = %err, "Rejected request"),
        _ => error!(error = %err, "Request failed"),
    }
    Json(json!({ "error": err.user_message() }))
}
