//! Dispatch router: one uniform request in, one vendor call out.

use std::time::{Duration, Instant};

use bytes::Bytes;
use tracing::{debug, info, warn};
use uuid::Uuid;
use voxllm::{HttpCall, ProviderId, ProviderRegistry, UniformRequest};

use crate::error::{DispatchError, TransportFailure};

/// Text produced by the vendor for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformResult {
    pub text: String,
}

/// Sends each request to the adapter registered for its provider.
///
/// Holds no per-request state; concurrent calls share only the connection pool
/// inside the `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: ProviderRegistry,
    client: reqwest::Client,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(registry: ProviderRegistry, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            registry,
            client,
            timeout,
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run `request` against its vendor. Exactly one outbound call, no retries.
    pub async fn execute(&self, request: &UniformRequest) -> Result<UniformResult, DispatchError> {
        let request_id = Uuid::new_v4();
        let provider = request.provider;

        let adapter = self
            .registry
            .get(provider)
            .ok_or_else(|| DispatchError::UnsupportedProvider(provider.to_string()))?;

        let call = adapter
            .build_call(request)
            .map_err(|source| DispatchError::Adapter { provider, source })?;

        debug!(
            "[REQ_ID:{}] DISPATCH: provider='{}' family={:?} url='{}'",
            request_id,
            provider,
            provider.family(),
            call.redacted_url()
        );

        let started = Instant::now();
        let outcome = match tokio::time::timeout(self.timeout, self.send(provider, call)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(DispatchError::Transport {
                provider,
                source: TransportFailure::TimedOut(self.timeout),
            }),
        };
        let elapsed_ms = started.elapsed().as_millis();

        let body = match outcome {
            Ok(body) => body,
            Err(err) => {
                warn!(
                    "[REQ_ID:{}] DISPATCH_FAILED: provider='{}' kind={} elapsed_ms={} error={}",
                    request_id,
                    provider,
                    err.kind(),
                    elapsed_ms,
                    err
                );
                return Err(err);
            }
        };

        let text = adapter.extract_text(&body).map_err(|source| {
            warn!(
                "[REQ_ID:{}] EXTRACTION_FAILED: provider='{}' error={}",
                request_id, provider, source
            );
            DispatchError::Extraction { provider, source }
        })?;

        info!(
            "[REQ_ID:{}] DISPATCH_OK: provider='{}' elapsed_ms={} chars={}",
            request_id,
            provider,
            elapsed_ms,
            text.chars().count()
        );

        Ok(UniformResult { text })
    }

    async fn send(&self, provider: ProviderId, call: HttpCall) -> Result<Bytes, DispatchError> {
        let transport = |err: reqwest::Error| DispatchError::Transport {
            provider,
            source: TransportFailure::Request(err),
        };

        let mut builder = self.client.request(call.method, &call.url);
        for (name, value) in call.headers {
            builder = builder.header(name, value);
        }

        let response = builder.body(call.body).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Upstream { provider, status });
        }

        response.bytes().await.map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use voxllm::{ExtractionError, ProviderEndpoints};

    fn dispatcher(base_url: &str, timeout: Duration) -> Dispatcher {
        Dispatcher::new(
            ProviderRegistry::with_defaults(&ProviderEndpoints::all(base_url)),
            reqwest::Client::new(),
            timeout,
        )
    }

    fn gemini_request() -> UniformRequest {
        UniformRequest::new("Fix", "txt", "key-1", ProviderId::Gemini)
    }

    #[tokio::test]
    async fn test_gemini_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-pro:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "key-1".into()))
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "contents": [{ "parts": [{ "text": "Fix\n\nטקסט:\ntxt" }] }]
            })))
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"X"}]}}]}"#)
            .create_async()
            .await;

        let result = dispatcher(&server.url(), Duration::from_secs(5))
            .execute(&gemini_request())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result, UniformResult { text: "X".to_string() });
    }

    #[tokio::test]
    async fn test_chat_success_sends_bearer() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-1")
            .match_body(Matcher::PartialJson(json!({ "model": "gpt-4o-mini" })))
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"X"}}]}"#)
            .create_async()
            .await;

        let request = UniformRequest::new("Fix", "txt", "sk-1", ProviderId::OpenAI);
        let result = dispatcher(&server.url(), Duration::from_secs(5))
            .execute(&request)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.text, "X");
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/openai/v1/chat/completions")
            .with_status(401)
            .with_body(r#"{"choices":[{"message":{"content":"not used"}}]}"#)
            .create_async()
            .await;

        let request = UniformRequest::new("Fix", "txt", "bad", ProviderId::Groq);
        let err = dispatcher(&server.url(), Duration::from_secs(5))
            .execute(&request)
            .await
            .unwrap_err();

        mock.assert_async().await;
        match err {
            DispatchError::Upstream { provider, status } => {
                assert_eq!(provider, ProviderId::Groq);
                assert_eq!(status.as_u16(), 401);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_schema_is_extraction_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-pro:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let err = dispatcher(&server.url(), Duration::from_secs(5))
            .execute(&gemini_request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Extraction {
                provider: ProviderId::Gemini,
                source: ExtractionError::MissingPath(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_unregistered_provider() {
        let registry = ProviderRegistry::with_defaults(&ProviderEndpoints::default())
            .subset(&[ProviderId::Gemini]);
        let dispatcher = Dispatcher::new(registry, reqwest::Client::new(), Duration::from_secs(1));

        let request = UniformRequest::new("a", "b", "k", ProviderId::OpenAI);
        let err = dispatcher.execute(&request).await.unwrap_err();
        assert!(matches!(err, DispatchError::UnsupportedProvider(ref name) if name == "openai"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = dispatcher(&format!("http://{addr}"), Duration::from_secs(5))
            .execute(&gemini_request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Transport {
                source: TransportFailure::Request(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_deadline_is_transport_error() {
        // Accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let silent = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let err = dispatcher(&format!("http://{addr}"), Duration::from_millis(200))
            .execute(&gemini_request())
            .await
            .unwrap_err();
        silent.abort();

        assert!(matches!(
            err,
            DispatchError::Transport {
                source: TransportFailure::TimedOut(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-pro:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"same"}]}}]}"#)
            .expect(2)
            .create_async()
            .await;

        let dispatcher = dispatcher(&server.url(), Duration::from_secs(5));
        let first = dispatcher.execute(&gemini_request()).await.unwrap();
        let second = dispatcher.execute(&gemini_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
    }
}
