//! voxllm: translates a vendor-agnostic text request into the wire formats of
//! Gemini and the OpenAI-compatible chat APIs (OpenAI, Groq), and pulls the
//! generated text back out of their responses.
//!
//! Nothing in this crate performs I/O. Adapters describe the outbound call as an
//! [`HttpCall`] and the caller decides how to send it.

pub mod apis;
pub mod providers;

pub use providers::gemini::GeminiAdapter;
pub use providers::id::{ApiFamily, ProviderId, UnknownProvider};
pub use providers::openai::OpenAiChatAdapter;
pub use providers::prompt::{compose_prompt, TEXT_LABEL};
pub use providers::registry::{ProviderEndpoints, ProviderRegistry};
pub use providers::traits::{AdapterError, ExtractionError, ProviderAdapter};
pub use providers::{HttpCall, UniformRequest};
