use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Provider identifier enum - the closed set of vendors the gateway can reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Gemini,
    Groq,
    OpenAI,
}

/// Wire format family a provider speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFamily {
    /// `models/{model}:generateContent`
    GenerateContent,
    /// `chat/completions`
    ChatCompletions,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [ProviderId::Gemini, ProviderId::Groq, ProviderId::OpenAI];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::Groq => "groq",
            ProviderId::OpenAI => "openai",
        }
    }

    pub fn family(&self) -> ApiFamily {
        match self {
            ProviderId::Gemini => ApiFamily::GenerateContent,
            // Groq hosts an OpenAI-compatible endpoint
            ProviderId::Groq | ProviderId::OpenAI => ApiFamily::ChatCompletions,
        }
    }
}

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    /// Names are matched exactly; "Gemini" is not "gemini".
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gemini" => Ok(ProviderId::Gemini),
            "groq" => Ok(ProviderId::Groq),
            "openai" => Ok(ProviderId::OpenAI),
            _ => Err(UnknownProvider(value.to_string())),
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_providers() {
        assert_eq!("gemini".parse::<ProviderId>(), Ok(ProviderId::Gemini));
        assert_eq!("groq".parse::<ProviderId>(), Ok(ProviderId::Groq));
        assert_eq!("openai".parse::<ProviderId>(), Ok(ProviderId::OpenAI));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            "Gemini".parse::<ProviderId>(),
            Err(UnknownProvider("Gemini".to_string()))
        );
        assert!("claude".parse::<ProviderId>().is_err());
        assert!("".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_display_round_trips_wire_name() {
        for id in ProviderId::ALL {
            assert_eq!(id.to_string().parse::<ProviderId>(), Ok(id));
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&ProviderId::OpenAI).unwrap(), "\"openai\"");
        assert_eq!(serde_json::to_string(&ProviderId::Groq).unwrap(), "\"groq\"");
    }

    #[test]
    fn test_families() {
        assert_eq!(ProviderId::Gemini.family(), ApiFamily::GenerateContent);
        assert_eq!(ProviderId::Groq.family(), ApiFamily::ChatCompletions);
        assert_eq!(ProviderId::OpenAI.family(), ApiFamily::ChatCompletions);
    }
}
