//! Chat relay HTTP handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parley_types::{ChatBody, ReplyBody};
use tracing::warn;

use crate::llm::ProviderRequest;
use crate::response;
use crate::server::AppState;

/// POST /api/chat
///
/// Relays the conversation to the requested provider and answers with
/// `{"reply": "..."}`. When the upstream call fails and fallback replies are
/// enabled, providers that define a placeholder answer with it instead of an
/// error status; otherwise the failure is a 502 with `{"error": "..."}`.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatBody>) -> Response {
    let request = ProviderRequest::from(body);

    let result = if state.fallback_replies {
        state.relay.complete_or_fallback(&request).await
    } else {
        state.relay.complete(&request).await
    };

    match result {
        Ok(reply) => (StatusCode::OK, Json(ReplyBody { reply })).into_response(),
        Err(e) => {
            warn!(
                provider = %e.provider(),
                model = %request.model,
                error = %e,
                "upstream completion failed"
            );
            response::bad_gateway(format!("LLM request failed: {e}")).into_response()
        }
    }
}
