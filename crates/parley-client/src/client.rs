//! HTTP client for the relay's `/api/chat` endpoint.

use parley_types::{ChatBody, Provider, ReplyBody};
use reqwest::Client;
use tracing::{debug, warn};

use crate::conversation::Conversation;
use crate::error::ClientError;

/// Provider selection for a conversation, chosen at runtime.
#[derive(Clone)]
pub struct Target {
    pub provider: Provider,
    pub model: String,
    pub api_key: String,
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Client for a running relay server.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Send one chat body and return the reply text.
    ///
    /// Any non-success status becomes [`ClientError::RequestFailed`]. A
    /// successful response may still carry a provider's placeholder reply.
    pub async fn complete(&self, body: &ChatBody) -> Result<String, ClientError> {
        let url = format!("{}/api/chat", self.base_url);

        let response = self.client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(status, provider = %body.provider, "relay returned non-success status");
            return Err(ClientError::RequestFailed { status });
        }

        let reply: ReplyBody = response.json().await?;
        Ok(reply.reply)
    }

    /// Run one user turn against the conversation.
    ///
    /// The user message is appended before the call and stays even if the
    /// call fails. The assistant reply is appended only on success.
    pub async fn send_turn(
        &self,
        conversation: &mut Conversation,
        target: &Target,
        content: impl Into<String>,
    ) -> Result<String, ClientError> {
        conversation.push_user(content);

        let body = ChatBody {
            messages: conversation.messages().to_vec(),
            provider: target.provider,
            model: target.model.clone(),
            api_key: target.api_key.clone(),
        };
        debug!(
            provider = %target.provider,
            model = %target.model,
            messages = body.messages.len(),
            "sending turn"
        );

        let reply = self.complete(&body).await?;
        conversation.push_assistant(reply.clone());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REQUEST_FAILED_MESSAGE;
    use parley_types::Role;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn target() -> Target {
        Target {
            provider: Provider::Gemini,
            model: "gemini-1.5-flash".to_string(),
            api_key: "AIza-test".to_string(),
        }
    }

    #[tokio::test]
    async fn complete_returns_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({
                "provider": "gemini",
                "model": "gemini-1.5-flash",
                "apiKey": "AIza-test"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "hi there"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = RelayClient::new(server.uri());
        let mut conversation = Conversation::new();
        let reply = client
            .send_turn(&mut conversation, &target(), "hello")
            .await
            .unwrap();

        assert_eq!(reply, "hi there");
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[1].role, Role::Assistant);
        assert_eq!(conversation.messages()[1].content, "hi there");
    }

    #[tokio::test]
    async fn send_turn_includes_full_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({
                "messages": [
                    {"role": "user", "content": "first"},
                    {"role": "assistant", "content": "reply"},
                    {"role": "user", "content": "second"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = RelayClient::new(format!("{}/", server.uri()));
        let mut conversation = Conversation::from(vec![
            parley_types::ChatMessage::user("first"),
            parley_types::ChatMessage::assistant("reply"),
        ]);
        client
            .send_turn(&mut conversation, &target(), "second")
            .await
            .unwrap();
        assert_eq!(conversation.len(), 4);
    }

    #[tokio::test]
    async fn non_success_status_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(502).set_body_json(json!({"error": "LLM request failed"})),
            )
            .mount(&server)
            .await;

        let client = RelayClient::new(server.uri());
        let mut conversation = Conversation::new();
        let err = client
            .send_turn(&mut conversation, &target(), "hello")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::RequestFailed { status: 502 }));
        assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE);

        // The user turn stays; nothing is recorded for the assistant.
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::User);
    }

    #[tokio::test]
    async fn placeholder_reply_is_a_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"reply": "[gemini error]"})),
            )
            .mount(&server)
            .await;

        let client = RelayClient::new(server.uri());
        let mut conversation = Conversation::new();
        let reply = client
            .send_turn(&mut conversation, &target(), "hello")
            .await
            .unwrap();
        assert_eq!(reply, "[gemini error]");
        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn target_debug_redacts_key() {
        let debug = format!("{:?}", target());
        assert!(!debug.contains("AIza-test"));
    }
}
