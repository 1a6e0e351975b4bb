//! Provider dispatch and the single upstream round trip.

use parley_types::{ChatBody, ChatMessage, Provider};
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};

use super::endpoints::Endpoints;
use super::error::RelayError;
use super::{anthropic, gemini, openai};

/// One completion call. Lives only for the duration of [`Relay::complete`].
#[derive(Debug)]
pub struct ProviderRequest {
    pub provider: Provider,
    pub model: String,
    credential: SecretString,
    pub messages: Vec<ChatMessage>,
}

impl ProviderRequest {
    pub fn new(
        provider: Provider,
        model: impl Into<String>,
        credential: impl Into<String>,
        messages: Vec<ChatMessage>,
    ) -> Self {
        let credential: String = credential.into();
        Self {
            provider,
            model: model.into(),
            credential: SecretString::from(credential),
            messages,
        }
    }

    pub(super) fn credential(&self) -> &str {
        self.credential.expose_secret()
    }
}

impl From<ChatBody> for ProviderRequest {
    fn from(body: ChatBody) -> Self {
        Self::new(body.provider, body.model, body.api_key, body.messages)
    }
}

/// Request shaping and reply extraction for one provider.
struct Strategy {
    build: fn(&Client, &str, &ProviderRequest) -> RequestBuilder,
    extract: fn(&Value) -> Option<String>,
}

impl Strategy {
    fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::Gemini => Strategy {
                build: gemini::build_request,
                extract: gemini::extract_reply,
            },
            Provider::OpenAI | Provider::Groq => Strategy {
                build: openai::build_request,
                extract: openai::extract_reply,
            },
            Provider::Anthropic => Strategy {
                build: anthropic::build_request,
                extract: anthropic::extract_reply,
            },
        }
    }
}

/// Stateless relay to the upstream chat-completion APIs.
///
/// Holds no credentials; each call carries its own.
#[derive(Debug, Clone)]
pub struct Relay {
    client: Client,
    endpoints: Endpoints,
}

impl Relay {
    #[must_use]
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Send the conversation to the selected provider and return its reply text.
    ///
    /// Issues exactly one outbound request. No retries, no client-side timeout.
    pub async fn complete(&self, request: &ProviderRequest) -> Result<String, RelayError> {
        let provider = request.provider;
        let strategy = Strategy::for_provider(provider);
        let base_url = self.endpoints.base_url(provider);

        debug!(
            %provider,
            model = %request.model,
            messages = request.messages.len(),
            "dispatching completion"
        );

        let response = (strategy.build)(&self.client, base_url, request)
            .send()
            .await
            .map_err(|e| RelayError::request(provider, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::request(provider, e))?;

        if !status.is_success() {
            return Err(RelayError::Api {
                provider,
                status: status.as_u16(),
                message: body,
            });
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|source| RelayError::Decode { provider, source })?;

        (strategy.extract)(&value).ok_or(RelayError::MissingReply { provider })
    }

    /// Like [`Relay::complete`], but renders a failure as the provider's
    /// fallback literal when it has one.
    ///
    /// The underlying failure is logged before being replaced.
    pub async fn complete_or_fallback(
        &self,
        request: &ProviderRequest,
    ) -> Result<String, RelayError> {
        match self.complete(request).await {
            Ok(reply) => Ok(reply),
            Err(e) => match e.fallback_reply() {
                Some(literal) => {
                    warn!(
                        provider = %e.provider(),
                        error = %e,
                        "completion failed, using fallback reply"
                    );
                    Ok(literal.to_string())
                }
                None => Err(e),
            },
        }
    }
}
