//! AI and translation endpoint handlers
//!
//! Both endpoints collapse every downstream failure into one fixed message.
//! The classification is logged here and never sent to the caller.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};
use voxllm::{ProviderId, UniformRequest};

use super::AppState;
use crate::config::UnknownProviderPolicy;
use crate::dispatch::{Dispatcher, UniformResult};
use crate::error::DispatchError;
use crate::validation::{AiPayload, TranslatePayload};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const UNSUPPORTED_PROVIDER: &str = "Unsupported provider";
pub const AI_FAILED: &str = "AI processing failed";
pub const TRANSLATION_FAILED: &str = "Translation failed";

#[derive(Debug, Serialize)]
pub struct AiResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub ai: Vec<ProviderId>,
    pub translate: Vec<ProviderId>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn failure(status: StatusCode, error: &'static str) -> HandlerError {
    (status, Json(ErrorResponse { error }))
}

/// Rewrite text with a caller-supplied instruction
pub async fn ai(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AiResponse>, HandlerError> {
    let body = parse_body(&body, "AI")
        .ok_or_else(|| failure(StatusCode::INTERNAL_SERVER_ERROR, AI_FAILED))?;

    let payload = AiPayload::from_json(&body).map_err(|e| {
        warn!("[WARN] AI request rejected: {}", e);
        failure(StatusCode::BAD_REQUEST, MISSING_FIELDS)
    })?;

    let outcome = dispatch(&state.ai, payload.provider.as_deref(), |provider| {
        UniformRequest::new(
            payload.prompt.clone(),
            payload.text.clone(),
            payload.api_key.clone(),
            provider,
        )
    })
    .await;

    match settle(outcome, state.unknown_provider, "AI")? {
        Some(result) => Ok(Json(AiResponse { result: result.text })),
        None => Err(failure(StatusCode::INTERNAL_SERVER_ERROR, AI_FAILED)),
    }
}

/// Translate text between two languages given by code
pub async fn translate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TranslateResponse>, HandlerError> {
    let body = parse_body(&body, "Translation")
        .ok_or_else(|| failure(StatusCode::INTERNAL_SERVER_ERROR, TRANSLATION_FAILED))?;

    let payload = TranslatePayload::from_json(&body).map_err(|e| {
        warn!("[WARN] Translation request rejected: {}", e);
        failure(StatusCode::BAD_REQUEST, MISSING_FIELDS)
    })?;

    let instruction = state
        .languages
        .translation_instruction(&payload.source_lang, &payload.target_lang, &payload.text);

    let outcome = dispatch(&state.translate, payload.provider.as_deref(), |provider| {
        UniformRequest::instruction_only(instruction.clone(), payload.api_key.clone(), provider)
    })
    .await;

    match settle(outcome, state.unknown_provider, "Translation")? {
        Some(result) => Ok(Json(TranslateResponse {
            translation: result.text.trim().to_string(),
        })),
        None => Err(failure(StatusCode::INTERNAL_SERVER_ERROR, TRANSLATION_FAILED)),
    }
}

/// List providers wired per endpoint
pub async fn providers(State(state): State<Arc<AppState>>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        ai: state.ai.registry().providers(),
        translate: state.translate.registry().providers(),
    })
}

/// `None` for a body that is not JSON, or is JSON `null`
fn parse_body(body: &[u8], endpoint: &str) -> Option<Value> {
    match serde_json::from_slice(body) {
        Ok(Value::Null) => {
            error!("[ERROR] {} error: request body is null", endpoint);
            None
        }
        Ok(value) => Some(value),
        Err(e) => {
            error!("[ERROR] {} error: request body is not JSON: {}", endpoint, e);
            None
        }
    }
}

async fn dispatch(
    dispatcher: &Dispatcher,
    provider: Option<&str>,
    build: impl FnOnce(ProviderId) -> UniformRequest,
) -> Result<UniformResult, DispatchError> {
    let provider = provider
        .ok_or_else(|| DispatchError::UnsupportedProvider("<non-string>".to_string()))?
        .parse::<ProviderId>()
        .map_err(|e| DispatchError::UnsupportedProvider(e.0))?;
    dispatcher.execute(&build(provider)).await
}

/// Map a dispatch outcome to a result, an empty result, or a handler error.
/// `Ok(None)` means a downstream failure the caller turns into its 500 message.
fn settle(
    outcome: Result<UniformResult, DispatchError>,
    policy: UnknownProviderPolicy,
    endpoint: &str,
) -> Result<Option<UniformResult>, HandlerError> {
    match outcome {
        Ok(result) => Ok(Some(result)),
        Err(DispatchError::UnsupportedProvider(name)) => match policy {
            UnknownProviderPolicy::EmptyResult => {
                warn!(
                    "[WARN] {} request for unsupported provider '{}', returning empty result",
                    endpoint, name
                );
                Ok(Some(UniformResult { text: String::new() }))
            }
            UnknownProviderPolicy::Reject => {
                warn!("[WARN] {} request for unsupported provider '{}' rejected", endpoint, name);
                Err(failure(StatusCode::BAD_REQUEST, UNSUPPORTED_PROVIDER))
            }
        },
        Err(e) => {
            error!("[ERROR] {} error ({}): {}", endpoint, e.kind(), e);
            Ok(None)
        }
    }
}
