//! Provider traits for vendor-agnostic request/response handling
//!
//! An adapter is the only place that knows a vendor's wire format. The caller
//! hands it a [`UniformRequest`], sends the [`HttpCall`] it gets back, and gives
//! the raw response body to [`ProviderAdapter::extract_text`].

use super::{HttpCall, ProviderId, UniformRequest};

/// Failure while building an outbound call
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The response arrived but the generated text could not be located in it
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("response body does not match the expected schema: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("response is missing `{0}`")]
    MissingPath(&'static str),
}

/// Main adapter interface trait
pub trait ProviderAdapter: Send + Sync {
    /// Vendor this adapter speaks for
    fn provider_id(&self) -> ProviderId;

    /// Build the outbound call for `request`. Deterministic: the same request
    /// always yields the same URL, headers and body.
    fn build_call(&self, request: &UniformRequest) -> Result<HttpCall, AdapterError>;

    /// Pull the generated text out of a successful response body
    fn extract_text(&self, body: &[u8]) -> Result<String, ExtractionError>;
}
