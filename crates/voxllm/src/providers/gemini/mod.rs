//! Gemini provider implementation
//!
//! Gemini speaks its own `generateContent` format and takes the API key as a
//! query parameter instead of a header.

pub mod provider;
pub use provider::{GeminiAdapter, GEMINI_BASE_URL, GEMINI_MODEL};
