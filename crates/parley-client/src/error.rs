//! Client error types.

use thiserror::Error;

/// Fixed message shown to the user when the relay answers with a non-success status.
pub const REQUEST_FAILED_MESSAGE: &str = "応答の取得に失敗しました。もう一度お試しください。";

/// Errors that can occur when calling the relay.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Relay answered with a non-success status
    #[error("relay request failed (status {status})")]
    RequestFailed { status: u16 },

    /// HTTP request to the relay failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ClientError {
    /// Text to show in the conversation for this failure.
    ///
    /// Every failure renders the same message; the status only reaches logs.
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}
