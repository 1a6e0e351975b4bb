//! OpenAI chat-completions format.
//!
//! Used for OpenAI and Groq, which exposes the same API under its own base URL.

use parley_types::ChatMessage;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::relay::ProviderRequest;

/// Messages pass through with their roles unchanged.
#[derive(serde::Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

pub(super) fn build_request(
    client: &Client,
    base_url: &str,
    request: &ProviderRequest,
) -> RequestBuilder {
    let url = format!("{}/chat/completions", base_url);

    client
        .post(url)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", request.credential()))
        .json(&Request {
            model: &request.model,
            messages: &request.messages,
        })
}

pub(super) fn extract_reply(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::user("Hello!"), ChatMessage::assistant("Hi")];
        let request = Request {
            model: "gpt-4o-mini",
            messages: &messages,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "user", "content": "Hello!"},
                    {"role": "assistant", "content": "Hi"}
                ]
            })
        );
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_extract_reply() {
        let body = json!({
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "Hello! How can I help you today?"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 8, "total_tokens": 18}
        });
        assert_eq!(
            extract_reply(&body).as_deref(),
            Some("Hello! How can I help you today?")
        );
    }

    #[test]
    fn test_extract_reply_null_content() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": null}}]});
        assert_eq!(extract_reply(&body), None);
        assert_eq!(extract_reply(&json!({"error": {"message": "bad key"}})), None);
    }
}
