use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use voxllm::{AdapterError, ExtractionError, ProviderId};

/// Inbound payload rejected before any outbound call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Failure of a single dispatched call
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("provider '{0}' is not supported by this endpoint")]
    UnsupportedProvider(String),

    #[error("failed to build {provider} request: {source}")]
    Adapter {
        provider: ProviderId,
        source: AdapterError,
    },

    #[error("{provider} API error: HTTP {status}")]
    Upstream {
        provider: ProviderId,
        status: StatusCode,
    },

    #[error("could not reach {provider}: {source}")]
    Transport {
        provider: ProviderId,
        source: TransportFailure,
    },

    #[error("unexpected {provider} response: {source}")]
    Extraction {
        provider: ProviderId,
        source: ExtractionError,
    },
}

#[derive(Error, Debug)]
pub enum TransportFailure {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("no response within {0:?}")]
    TimedOut(Duration),
}

impl DispatchError {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::UnsupportedProvider(_) => "unsupported_provider",
            DispatchError::Adapter { .. } => "adapter",
            DispatchError::Upstream { .. } => "upstream",
            DispatchError::Transport { .. } => "transport",
            DispatchError::Extraction { .. } => "extraction",
        }
    }
}
