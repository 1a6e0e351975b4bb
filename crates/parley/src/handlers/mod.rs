//! HTTP request handlers.

mod chat;
mod health;
mod version;

pub use chat::chat;
pub use health::{livez, readyz};
pub use version::version;

use axum::response::{IntoResponse, Response};

use crate::response;

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    response::not_found("Not found").into_response()
}
