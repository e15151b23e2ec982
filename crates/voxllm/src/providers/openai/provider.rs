//! OpenAI-compatible chat completions adapter
//!
//! Shared by every vendor that exposes the `chat/completions` schema with
//! bearer-token auth. Only the host, path and model differ between them.

use log::debug;

use crate::apis::openai::{ChatCompletionsRequest, ChatCompletionsResponse};
use crate::providers::groq::{GROQ_BASE_URL, GROQ_CHAT_PATH, GROQ_MODEL};
use crate::providers::traits::{AdapterError, ExtractionError, ProviderAdapter};
use crate::providers::{HttpCall, ProviderId, UniformRequest};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const OPENAI_CHAT_PATH: &str = "/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct OpenAiChatAdapter {
    provider: ProviderId,
    base_url: String,
    path: &'static str,
    model: &'static str,
}

impl OpenAiChatAdapter {
    pub fn openai() -> Self {
        Self {
            provider: ProviderId::OpenAI,
            base_url: OPENAI_BASE_URL.to_string(),
            path: OPENAI_CHAT_PATH,
            model: OPENAI_MODEL,
        }
    }

    pub fn groq() -> Self {
        Self {
            provider: ProviderId::Groq,
            base_url: GROQ_BASE_URL.to_string(),
            path: GROQ_CHAT_PATH,
            model: GROQ_MODEL,
        }
    }

    /// Replace scheme and host; the vendor path and model stay fixed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl ProviderAdapter for OpenAiChatAdapter {
    fn provider_id(&self) -> ProviderId {
        self.provider
    }

    fn build_call(&self, request: &UniformRequest) -> Result<HttpCall, AdapterError> {
        let prompt = request.prompt();
        debug!(
            "{}: composed prompt of {} chars for model {}",
            self.provider,
            prompt.chars().count(),
            self.model
        );

        let body = serde_json::to_vec(&ChatCompletionsRequest::user_prompt(self.model, prompt))?;
        let url = format!("{}{}", self.base_url, self.path);
        Ok(HttpCall::post_json(url, body)
            .with_header("Authorization", format!("Bearer {}", request.credential)))
    }

    fn extract_text(&self, body: &[u8]) -> Result<String, ExtractionError> {
        let response: ChatCompletionsResponse = serde_json::from_slice(body)?;
        response.into_first_text()
    }
}
