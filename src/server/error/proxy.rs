use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned when the authentication provider cannot be reached.
pub const AUTH_UNREACHABLE_MESSAGE: &str = "Failed to connect to authentication server";

#[derive(Error, Debug)]
pub enum ProxyError {
    /// The authentication provider could not be reached at all.
    ///
    /// Results in 502 Bad Gateway with a fixed message; the underlying transport
    /// error is only logged.
    #[error("Failed to reach authentication server: {0}")]
    AuthUnreachable(#[source] reqwest::Error),

    /// The backend answered but its response could not be relayed.
    ///
    /// Results in 502 Bad Gateway with a generic message.
    #[error("Failed to relay backend response: {0}")]
    Relay(String),

    /// The inbound body exceeded the given size or could not be read.
    ///
    /// Results in 413 Payload Too Large; nothing is sent to the backend.
    #[error("Request body exceeds {0} bytes")]
    BodyTooLarge(usize),
}

/// Converts proxy errors into HTTP responses.
///
/// - `AuthUnreachable` → 502 with `AUTH_UNREACHABLE_MESSAGE`
/// - `Relay` → 502 with a generic message
/// - `BodyTooLarge` → 413
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::AuthUnreachable(_) => (StatusCode::BAD_GATEWAY, AUTH_UNREACHABLE_MESSAGE),
            Self::Relay(_) => (StatusCode::BAD_GATEWAY, "Invalid response from backend"),
            Self::BodyTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
