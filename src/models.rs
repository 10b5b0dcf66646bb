use crate::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state.
///
/// `document` is the single process-wide slot holding the text of the most
/// recently uploaded document. Each successful upload overwrites it;
/// last-write-wins, no per-session isolation.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub document: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            document: Arc::new(RwLock::new(None)),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
