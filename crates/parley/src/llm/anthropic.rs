//! Anthropic Messages API format.

use parley_types::ChatMessage;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::relay::ProviderRequest;

const API_VERSION: &str = "2023-06-01";

/// Output cap sent with every request, independent of conversation size.
const MAX_TOKENS: u32 = 1024;

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(serde::Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

fn to_request<'a>(model: &'a str, messages: &'a [ChatMessage]) -> Request<'a> {
    Request {
        model,
        max_tokens: MAX_TOKENS,
        messages: messages
            .iter()
            .map(|m| RequestMessage {
                role: m.role.as_str(),
                content: &m.content,
            })
            .collect(),
    }
}

pub(super) fn build_request(
    client: &Client,
    base_url: &str,
    request: &ProviderRequest,
) -> RequestBuilder {
    let url = format!("{}/v1/messages", base_url);

    client
        .post(url)
        .header("Content-Type", "application/json")
        .header("x-api-key", request.credential())
        .header("anthropic-version", API_VERSION)
        .json(&to_request(&request.model, &request.messages))
}

/// Only the first content block is read.
pub(super) fn extract_reply(body: &Value) -> Option<String> {
    body.pointer("/content/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}
