use log::debug;

use crate::apis::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::providers::traits::{AdapterError, ExtractionError, ProviderAdapter};
use crate::providers::{HttpCall, ProviderId, UniformRequest};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MODEL: &str = "gemini-pro";

/// Gemini provider implementation
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    base_url: String,
}

impl GeminiAdapter {
    pub fn new() -> Self {
        Self::with_base_url(GEMINI_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The key goes into the query exactly as the caller sent it
    fn endpoint(&self, credential: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, credential
        )
    }
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn build_call(&self, request: &UniformRequest) -> Result<HttpCall, AdapterError> {
        let prompt = request.prompt();
        debug!("gemini: composed prompt of {} chars", prompt.chars().count());

        let body = serde_json::to_vec(&GenerateContentRequest::from_prompt(prompt))?;
        Ok(HttpCall::post_json(self.endpoint(&request.credential), body))
    }

    fn extract_text(&self, body: &[u8]) -> Result<String, ExtractionError> {
        let response: GenerateContentResponse = serde_json::from_slice(body)?;
        response.into_first_text()
    }
}
