//! Groq provider constants
//!
//! Groq hosts an OpenAI-compatible endpoint, so it is served by
//! [`OpenAiChatAdapter::groq`](crate::OpenAiChatAdapter::groq).

pub const GROQ_BASE_URL: &str = "https://api.groq.com";
pub const GROQ_CHAT_PATH: &str = "/openai/v1/chat/completions";
pub const GROQ_MODEL: &str = "mixtral-8x7b-32768";
