//! Relay error types.

use parley_types::Provider;
use thiserror::Error;

/// Errors that can occur while relaying a completion upstream.
///
/// Every variant carries the provider it came from so callers can render the
/// provider's fallback reply.
#[derive(Debug, Error)]
pub enum RelayError {
    /// HTTP request failed before a response arrived
    #[error("{provider} request failed: {source}")]
    Request {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream returned a non-success status
    #[error("{provider} api error (status {status}): {message}")]
    Api {
        provider: Provider,
        status: u16,
        message: String,
    },

    /// Response body was not valid JSON
    #[error("{provider} returned an unreadable body: {source}")]
    Decode {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },

    /// Response body had no text at the provider's reply path
    #[error("{provider} response contained no reply text")]
    MissingReply { provider: Provider },
}

impl RelayError {
    /// Wrap a transport error, dropping the request URL.
    ///
    /// Gemini carries the API key in the query string, so URLs never make it
    /// into error messages.
    pub(crate) fn request(provider: Provider, source: reqwest::Error) -> Self {
        RelayError::Request {
            provider,
            source: source.without_url(),
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            RelayError::Request { provider, .. }
            | RelayError::Api { provider, .. }
            | RelayError::Decode { provider, .. }
            | RelayError::MissingReply { provider } => *provider,
        }
    }

    /// Placeholder reply that stands in for this failure, if the provider has one.
    pub fn fallback_reply(&self) -> Option<&'static str> {
        self.provider().fallback_literal()
    }
}
