pub mod provider;
pub use provider::{OpenAiChatAdapter, OPENAI_BASE_URL, OPENAI_CHAT_PATH, OPENAI_MODEL};
