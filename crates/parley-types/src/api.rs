//! Request and response envelopes of the relay's HTTP surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ChatMessage, Provider};

/// Body of `POST /api/chat`.
#[derive(Clone, Serialize, Deserialize)]
pub struct ChatBody {
    pub messages: Vec<ChatMessage>,
    pub provider: Provider,
    pub model: String,
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

impl fmt::Debug for ChatBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatBody")
            .field("messages", &self.messages)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Successful reply envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyBody {
    pub reply: String,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn test_chat_body_deserialization() {
        let json = r#"{
            "messages": [
                {"role": "user", "content": "hello"},
                {"role": "assistant", "content": "hi"}
            ],
            "provider": "gemini",
            "model": "gemini-1.5-flash",
            "apiKey": "secret"
        }"#;

        let body: ChatBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.provider, Provider::Gemini);
        assert_eq!(body.model, "gemini-1.5-flash");
        assert_eq!(body.api_key, "secret");
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_chat_body_uses_camel_case_key() {
        let body = ChatBody {
            messages: vec![],
            provider: Provider::Groq,
            model: "llama3-8b-8192".to_string(),
            api_key: "k".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["apiKey"], "k");
        assert!(json.get("api_key").is_none());
    }

    #[test]
    fn test_chat_body_debug_redacts_key() {
        let body = ChatBody {
            messages: vec![],
            provider: Provider::Anthropic,
            model: "claude-3-haiku-20240307".to_string(),
            api_key: "sk-ant-very-secret".to_string(),
        };
        let debug = format!("{body:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
