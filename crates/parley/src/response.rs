//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use parley_types::ErrorBody;

pub type ErrorResponse = (StatusCode, Json<ErrorBody>);

pub fn error(status: StatusCode, message: impl Into<String>) -> ErrorResponse {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

pub fn not_found(message: impl Into<String>) -> ErrorResponse {
    error(StatusCode::NOT_FOUND, message)
}

pub fn bad_gateway(message: impl Into<String>) -> ErrorResponse {
    error(StatusCode::BAD_GATEWAY, message)
}
