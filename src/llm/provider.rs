use crate::types::{AppError, AppResult, LLMRequest, LLMResponse};
use async_trait::async_trait;

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Configuration for an LLM provider.
pub struct LLMProviderConfig {
    pub name: String,
    pub api_key: String,
    /// Endpoint override, mainly for tests against a stub server.
    pub base_url: Option<String>,
}

pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
}

impl LLM {
    pub fn new(provider: LLMProviderConfig) -> AppResult<Self> {
        let adapter: Box<dyn LLMAdapter> = match provider.name.as_str() {
            "openrouter" => {
                let mut adapter = crate::llm::openrouter::OpenRouterAdapter::new(&provider.api_key);
                if let Some(base_url) = &provider.base_url {
                    adapter = adapter.with_base_url(base_url);
                }
                Box::new(adapter)
            }
            other => {
                return Err(AppError::Config(format!(
                    "Unsupported LLM provider: {}",
                    other
                )))
            }
        };

        Ok(Self { adapter })
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}
