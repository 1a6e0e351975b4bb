//! Supported upstream LLM providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A hosted LLM API the relay can forward a conversation to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    OpenAI,
    Groq,
    Anthropic,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Gemini,
        Provider::OpenAI,
        Provider::Groq,
        Provider::Anthropic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAI => "openai",
            Provider::Groq => "groq",
            Provider::Anthropic => "anthropic",
        }
    }

    /// Placeholder reply rendered in place of a failed completion.
    ///
    /// `None` for providers whose failures always surface as errors.
    pub fn fallback_literal(&self) -> Option<&'static str> {
        match self {
            Provider::Gemini => Some("[gemini error]"),
            Provider::OpenAI => None,
            Provider::Groq => Some("[groq error]"),
            Provider::Anthropic => Some("[anthropic error]"),
        }
    }

    /// Environment variable conventionally holding this provider's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
            Provider::Groq => "GROQ_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown provider '{0}' (expected gemini, openai, groq or anthropic)")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_display() {
        for provider in Provider::ALL {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{provider}\""));
            assert_eq!(provider.as_str().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let err = "mistral".parse::<Provider>().unwrap_err();
        assert!(err.to_string().contains("mistral"));
        assert!(serde_json::from_str::<Provider>("\"mistral\"").is_err());
    }

    #[test]
    fn fallback_literals() {
        assert_eq!(Provider::Gemini.fallback_literal(), Some("[gemini error]"));
        assert_eq!(Provider::Groq.fallback_literal(), Some("[groq error]"));
        assert_eq!(
            Provider::Anthropic.fallback_literal(),
            Some("[anthropic error]")
        );
        assert_eq!(Provider::OpenAI.fallback_literal(), None);
    }
}
