//! Answer service: prompt construction and the outbound completion call.

use crate::llm::{LLMProviderConfig, LLM};
use crate::models::AppState;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest};
use tracing::debug;

pub const NO_DOCUMENT_MESSAGE: &str =
    "No document content available. Please upload a file first.";
pub const NO_QUESTION_MESSAGE: &str = "No question provided.";
pub const NOT_CONFIGURED_MESSAGE: &str = "API key not configured on server.";

const SYSTEM_PROMPT: &str = "Answer only the question directly. Do not include greetings, \
thanks, or polite filler. Just give the answer.";

pub struct AnswerAgent;

impl AnswerAgent {
    /// Answer a question against the currently cached document text.
    ///
    /// Preconditions are checked in a fixed order: cached document, then
    /// question, then API key. The full document text goes into the prompt
    /// verbatim; an oversized document simply fails the remote call and
    /// surfaces as the generic remote error.
    pub async fn answer(state: &AppState, question: &str) -> AppResult<String> {
        let context = state.document.read().await.clone();
        let context = match context {
            Some(text) if !text.is_empty() => text,
            _ => return Err(AppError::InvalidRequest(NO_DOCUMENT_MESSAGE.to_string())),
        };

        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::InvalidRequest(NO_QUESTION_MESSAGE.to_string()));
        }

        let llm_config = &state.config.llm;
        if llm_config.openrouter_api_key.is_empty() {
            return Err(AppError::Config(NOT_CONFIGURED_MESSAGE.to_string()));
        }

        let request = LLMRequest {
            model: llm_config.model.clone(),
            messages: vec![
                LLMMessage::system(SYSTEM_PROMPT),
                LLMMessage::user(format!("Context: {}\n\nQuestion: {}", context, question)),
            ],
            max_tokens: None,
            temperature: Some(0.7),
            top_p: Some(1.0),
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
            repetition_penalty: Some(1.0),
            top_k: Some(0),
        };

        let llm = LLM::new(LLMProviderConfig {
            name: llm_config.provider.clone(),
            api_key: llm_config.openrouter_api_key.clone(),
            base_url: llm_config.base_url.clone(),
        })?;

        let response = llm.create_chat_completion(&request).await?;
        debug!(
            finish_reason = %response.finish_reason,
            total_tokens = response.usage.total_tokens,
            "Received completion"
        );

        Ok(response.content)
    }
}
