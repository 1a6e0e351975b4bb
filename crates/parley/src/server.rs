use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::config::Config;
use crate::handlers;
use crate::llm::Relay;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
    pub fallback_replies: bool,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            relay: Relay::new(reqwest::Client::new(), config.providers.endpoints()),
            fallback_replies: config.relay.fallback_replies,
        }
    }
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    let api = Router::new()
        .route("/chat", post(handlers::chat))
        .with_state(state);

    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
