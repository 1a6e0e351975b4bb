//! Google Gemini `generateContent` format.

use parley_types::{ChatMessage, Role};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::relay::ProviderRequest;

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Serialize)]
struct Request<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

// ============================================================================
// Conversions
// ============================================================================

/// Gemini names the assistant side of the conversation `model`.
fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
    }
}

fn to_request(messages: &[ChatMessage]) -> Request<'_> {
    Request {
        contents: messages
            .iter()
            .map(|m| Content {
                role: role_name(m.role),
                parts: [Part { text: &m.content }],
            })
            .collect(),
    }
}

/// The key travels in the query string; there is no auth header.
pub(super) fn build_request(
    client: &Client,
    base_url: &str,
    request: &ProviderRequest,
) -> RequestBuilder {
    let url = format!("{}/models/{}:generateContent", base_url, request.model);

    client
        .post(url)
        .query(&[("key", request.credential())])
        .header("Content-Type", "application/json")
        .json(&to_request(&request.messages))
}

pub(super) fn extract_reply(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}
