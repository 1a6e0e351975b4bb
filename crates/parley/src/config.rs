use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::llm::Endpoints;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_saphyr::from_str(&contents)?)
    }
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    300
}

// ============================================================================
// RelayConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    /// Answer failed completions with the provider's placeholder reply
    /// instead of an error status.
    #[serde(default = "default_fallback_replies")]
    pub fallback_replies: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            fallback_replies: default_fallback_replies(),
        }
    }
}

fn default_fallback_replies() -> bool {
    true
}

// ============================================================================
// ProvidersConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_gemini")]
    pub gemini: ProviderConfig,
    #[serde(default = "default_openai")]
    pub openai: ProviderConfig,
    #[serde(default = "default_groq")]
    pub groq: ProviderConfig,
    #[serde(default = "default_anthropic")]
    pub anthropic: ProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gemini: default_gemini(),
            openai: default_openai(),
            groq: default_groq(),
            anthropic: default_anthropic(),
        }
    }
}

impl ProvidersConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            gemini: self.gemini.base_url.clone(),
            openai: self.openai.base_url.clone(),
            groq: self.groq.base_url.clone(),
            anthropic: self.anthropic.base_url.clone(),
        }
    }
}

fn default_gemini() -> ProviderConfig {
    ProviderConfig {
        base_url: Endpoints::GEMINI.to_string(),
    }
}

fn default_openai() -> ProviderConfig {
    ProviderConfig {
        base_url: Endpoints::OPENAI.to_string(),
    }
}

fn default_groq() -> ProviderConfig {
    ProviderConfig {
        base_url: Endpoints::GROQ.to_string(),
    }
}

fn default_anthropic() -> ProviderConfig {
    ProviderConfig {
        base_url: Endpoints::ANTHROPIC.to_string(),
    }
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}

// ============================================================================
// Tests
// ============================================================================
