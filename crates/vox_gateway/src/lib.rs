//! Vox Gateway Service
//!
//! Request-forwarding layer behind the voice-notes web client.
//!
//! # Features
//! - `POST /api/ai`: rewrite text with a free-form instruction
//! - `POST /api/translate`: translate text between two languages
//! - Gemini, Groq and OpenAI behind one request/response contract
//! - Per-request credentials, nothing stored server-side

pub mod config;
pub mod dispatch;
pub mod error;
pub mod languages;
pub mod server;
pub mod validation;

pub use config::{GatewayConfig, UnknownProviderPolicy};
pub use dispatch::{Dispatcher, UniformResult};
pub use error::{DispatchError, TransportFailure, ValidationError};
pub use languages::LanguageNames;
pub use server::{build_router, start_server, AppState};
