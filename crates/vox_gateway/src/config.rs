//! Gateway configuration
//!
//! Loaded from an optional YAML file. Every key has a default, so an absent
//! file yields a working local server.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use duration_string::DurationString;
use serde::Deserialize;
use voxllm::ProviderEndpoints;

pub const CONFIG_PATH_ENV: &str = "VOX_GATEWAY_CONFIG";
pub const HOST_ENV: &str = "VOX_GATEWAY_HOST";
pub const PORT_ENV: &str = "VOX_GATEWAY_PORT";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub listen: ListenConfig,
    /// Upper bound for one outbound vendor call, body included
    pub upstream_timeout: DurationString,
    pub providers: ProviderEndpoints,
    pub unknown_provider: UnknownProviderPolicy,
    /// Extra or replacement language display names for translation prompts
    pub languages: HashMap<String, String>,
    pub cors_allow_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

/// What an endpoint does with a provider name it has no adapter for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownProviderPolicy {
    /// Answer 200 with an empty result, as the web client has always seen
    #[default]
    EmptyResult,
    /// Answer 400 `Unsupported provider`
    Reject,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
            upstream_timeout: DurationString::new(Duration::from_secs(30)),
            providers: ProviderEndpoints::default(),
            unknown_provider: UnknownProviderPolicy::default(),
            languages: HashMap::new(),
            cors_allow_origins: Vec::new(),
        }
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

impl GatewayConfig {
    /// Load from `path` if given, then apply environment overrides
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml_str(&contents)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents)?;
        if config.upstream_timeout() == Duration::ZERO {
            anyhow::bail!("upstream_timeout must be greater than zero");
        }
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(host) = std::env::var(HOST_ENV) {
            self.listen.host = host;
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.listen.port = port
                .parse()
                .with_context(|| format!("{PORT_ENV} must be a port number, got '{port}'"))?;
        }
        Ok(())
    }

    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout.into()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen.host, self.listen.port)
    }
}
