//! Provider implementations for the supported LLM vendors
//!
//! Each vendor family gets one adapter that knows how to build the outbound
//! request and how to read the generated text back. The registry maps a
//! [`ProviderId`] to its adapter.

pub mod gemini;
pub mod groq;
pub mod id;
pub mod openai;
pub mod prompt;
pub mod registry;
pub mod traits;

use bytes::Bytes;
use http::Method;

pub use id::ProviderId;

/// Vendor-agnostic request handed to an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformRequest {
    /// Natural-language directive for the model.
    pub instruction: String,
    /// Text the instruction operates on. `None` when the instruction is
    /// already the complete prompt.
    pub source_text: Option<String>,
    /// Caller-supplied API key, forwarded as the vendor requires.
    pub credential: String,
    pub provider: ProviderId,
}

impl UniformRequest {
    pub fn new(
        instruction: impl Into<String>,
        source_text: impl Into<String>,
        credential: impl Into<String>,
        provider: ProviderId,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            source_text: Some(source_text.into()),
            credential: credential.into(),
            provider,
        }
    }

    /// A request whose instruction is sent to the vendor as-is.
    pub fn instruction_only(
        instruction: impl Into<String>,
        credential: impl Into<String>,
        provider: ProviderId,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            source_text: None,
            credential: credential.into(),
            provider,
        }
    }

    /// The prompt text the vendor receives.
    pub fn prompt(&self) -> String {
        prompt::compose_prompt(&self.instruction, self.source_text.as_deref())
    }
}

/// Outbound HTTP call described by an adapter. Built per request, never stored.
#[derive(Debug, Clone)]
pub struct HttpCall {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Bytes,
}

impl HttpCall {
    pub fn post_json(url: String, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            url,
            headers: vec![("Content-Type", "application/json".to_string())],
            body: Bytes::from(body),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: String) -> Self {
        self.headers.push((name, value));
        self
    }

    /// URL without its query string, safe to log (Gemini carries the key there).
    pub fn redacted_url(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }
}
