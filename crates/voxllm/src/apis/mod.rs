//! Wire shapes for the vendor APIs.
//!
//! Request types are exact: they serialize to what the vendor expects. Response
//! types are permissive (every level optional) so that a schema change shows up
//! as a typed [`ExtractionError`](crate::ExtractionError) instead of a panic.

pub mod gemini;
pub mod openai;

pub use gemini::{GenerateContentRequest, GenerateContentResponse};
pub use openai::{ChatCompletionsRequest, ChatCompletionsResponse, Role};
