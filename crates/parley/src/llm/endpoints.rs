//! Upstream base URLs.

use parley_types::Provider;

/// Base URL for each provider's API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub gemini: String,
    pub openai: String,
    pub groq: String,
    pub anthropic: String,
}

impl Endpoints {
    pub const GEMINI: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const OPENAI: &'static str = "https://api.openai.com/v1";
    pub const GROQ: &'static str = "https://api.groq.com/openai/v1";
    pub const ANTHROPIC: &'static str = "https://api.anthropic.com";

    /// Point every provider at the same base URL.
    pub fn uniform(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            gemini: base_url.clone(),
            openai: base_url.clone(),
            groq: base_url.clone(),
            anthropic: base_url,
        }
    }

    pub fn base_url(&self, provider: Provider) -> &str {
        let url = match provider {
            Provider::Gemini => &self.gemini,
            Provider::OpenAI => &self.openai,
            Provider::Groq => &self.groq,
            Provider::Anthropic => &self.anthropic,
        };
        url.trim_end_matches('/')
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            gemini: Self::GEMINI.to_string(),
            openai: Self::OPENAI.to_string(),
            groq: Self::GROQ.to_string(),
            anthropic: Self::ANTHROPIC.to_string(),
        }
    }
}
