use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    /// OpenRouter API key. May be empty; `/ask` then reports that the server
    /// is not configured instead of failing at startup.
    pub openrouter_api_key: String,
    pub provider: String,
    pub model: String,
    /// Override for the completion endpoint base URL (used by tests).
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            llm: LLMConfig {
                openrouter_api_key: env::var("OPENROUTER_API_KEY").unwrap_or_default(),
                provider: env::var("DOCCHAT_LLM_PROVIDER")
                    .unwrap_or_else(|_| "openrouter".to_string()),
                model: env::var("DOCCHAT_LLM_MODEL")
                    .unwrap_or_else(|_| "mistralai/mistral-small-3.1-24b-instruct:free".to_string()),
                base_url: env::var("OPENROUTER_BASE_URL").ok(),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| "uploads".to_string())
                    .into(),
            },
        })
    }
}
