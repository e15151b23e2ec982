use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use super::gemini::{GeminiAdapter, GEMINI_BASE_URL};
use super::groq::GROQ_BASE_URL;
use super::openai::{OpenAiChatAdapter, OPENAI_BASE_URL};
use super::traits::ProviderAdapter;
use super::ProviderId;

/// Scheme and host of every vendor. Overridable for proxies and tests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderEndpoints {
    pub gemini_base_url: String,
    pub openai_base_url: String,
    pub groq_base_url: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            gemini_base_url: GEMINI_BASE_URL.to_string(),
            openai_base_url: OPENAI_BASE_URL.to_string(),
            groq_base_url: GROQ_BASE_URL.to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Point every vendor at the same host
    pub fn all(base_url: &str) -> Self {
        Self {
            gemini_base_url: base_url.to_string(),
            openai_base_url: base_url.to_string(),
            groq_base_url: base_url.to_string(),
        }
    }
}

/// Maps each provider to the single adapter that serves it
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    adapters: HashMap<ProviderId, Arc<dyn ProviderAdapter>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every supported vendor wired
    pub fn with_defaults(endpoints: &ProviderEndpoints) -> Self {
        let mut registry = Self::new();
        registry
            .register(GeminiAdapter::with_base_url(endpoints.gemini_base_url.as_str()))
            .register(OpenAiChatAdapter::groq().with_base_url(endpoints.groq_base_url.as_str()))
            .register(
                OpenAiChatAdapter::openai().with_base_url(endpoints.openai_base_url.as_str()),
            );
        registry
    }

    /// Add an adapter under its own provider id, replacing any previous one
    pub fn register<A: ProviderAdapter + 'static>(&mut self, adapter: A) -> &mut Self {
        self.adapters.insert(adapter.provider_id(), Arc::new(adapter));
        self
    }

    pub fn get(&self, provider: ProviderId) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.get(&provider).cloned()
    }

    /// Registered providers in stable order
    pub fn providers(&self) -> Vec<ProviderId> {
        let mut providers: Vec<ProviderId> = self.adapters.keys().copied().collect();
        providers.sort();
        providers
    }

    /// Registry restricted to `providers`; ids that are not registered are skipped
    pub fn subset(&self, providers: &[ProviderId]) -> Self {
        let adapters = self
            .adapters
            .iter()
            .filter(|(id, _)| providers.contains(*id))
            .map(|(id, adapter)| (*id, Arc::clone(adapter)))
            .collect();
        Self { adapters }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::traits::{AdapterError, ExtractionError};
    use crate::providers::{HttpCall, UniformRequest};

    struct EchoAdapter;

    impl ProviderAdapter for EchoAdapter {
        fn provider_id(&self) -> ProviderId {
            ProviderId::OpenAI
        }

        fn build_call(&self, request: &UniformRequest) -> Result<HttpCall, AdapterError> {
            Ok(HttpCall::post_json(
                "http://echo.test".to_string(),
                request.prompt().into_bytes(),
            ))
        }

        fn extract_text(&self, body: &[u8]) -> Result<String, ExtractionError> {
            Ok(String::from_utf8_lossy(body).into_owned())
        }
    }

    #[test]
    fn test_defaults_wire_every_provider() {
        let registry = ProviderRegistry::with_defaults(&ProviderEndpoints::default());
        assert_eq!(registry.providers(), ProviderId::ALL.to_vec());
        for id in ProviderId::ALL {
            assert_eq!(registry.get(id).unwrap().provider_id(), id);
        }
    }

    #[test]
    fn test_subset() {
        let registry = ProviderRegistry::with_defaults(&ProviderEndpoints::default())
            .subset(&[ProviderId::Gemini, ProviderId::Groq]);
        assert_eq!(registry.providers(), vec![ProviderId::Gemini, ProviderId::Groq]);
        assert!(registry.get(ProviderId::OpenAI).is_none());
    }

    #[test]
    fn test_register_replaces_adapter() {
        let mut registry = ProviderRegistry::with_defaults(&ProviderEndpoints::default());
        registry.register(EchoAdapter);

        let adapter = registry.get(ProviderId::OpenAI).unwrap();
        let request = UniformRequest::new("a", "b", "k", ProviderId::OpenAI);
        assert_eq!(adapter.build_call(&request).unwrap().url, "http://echo.test");
        assert_eq!(registry.providers().len(), 3);
    }

    #[test]
    fn test_endpoints_feed_adapters() {
        let registry = ProviderRegistry::with_defaults(&ProviderEndpoints::all("http://mock:1"));
        let request = UniformRequest::new("a", "b", "k", ProviderId::Groq);
        let call = registry.get(ProviderId::Groq).unwrap().build_call(&request).unwrap();
        assert_eq!(call.url, "http://mock:1/openai/v1/chat/completions");
    }
}
