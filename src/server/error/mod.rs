//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of every server handler and startup step.
//! It implements `IntoResponse` so that handlers can propagate failures with `?`;
//! anything without a dedicated mapping becomes a logged, generic 500.

pub mod config;
pub mod proxy;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, proxy::ProxyError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Proxy failure with its own status mapping.
    ///
    /// Delegates to `ProxyError::into_response()` (502 Bad Gateway).
    #[error(transparent)]
    ProxyErr(#[from] ProxyError),

    /// HTTP client error from reqwest.
    ///
    /// Results in 500 Internal Server Error, e.g. when the backend API cannot
    /// be reached by the general proxy.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `ProxyErr`, delegated to `ProxyError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::ProxyErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
