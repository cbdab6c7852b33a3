use thiserror::Error;

use crate::model::{
    api::{BackendErrorDto, FieldErrors},
    validation::ValidationErrors,
};

/// Fallback when a 401 body cannot be read.
pub const SESSION_EXPIRED_FALLBACK: &str = "Sessão expirada ou inválida";
/// Used when a 401 body was readable but carried no message.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sessão expirada. Faça login novamente.";
/// Fallback when any other error body cannot be read.
pub const REQUEST_FAILED_FALLBACK: &str = "Erro na requisição";

/// Failure reported by the backend with a non-2xx status.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: u16,
    pub errors: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            errors: None,
        }
    }

    /// Builds the error for a failed response from its status and raw body.
    ///
    /// Malformed bodies never fail here; they fall back to a generic message.
    pub fn from_response(status_code: u16, body: &str) -> Self {
        let Ok(dto) = serde_json::from_str::<BackendErrorDto>(body) else {
            let fallback = if status_code == 401 {
                SESSION_EXPIRED_FALLBACK
            } else {
                REQUEST_FAILED_FALLBACK
            };
            return Self::new(fallback, status_code);
        };

        let message = match dto.message.filter(|m| !m.is_empty()) {
            Some(message) => message,
            None if status_code == 401 => SESSION_EXPIRED_MESSAGE.to_string(),
            None => format!("Erro: {}", status_code),
        };

        Self {
            message,
            status_code,
            errors: dto.errors,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.as_ref()?.get(field).map(Vec::as_slice)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == 401
    }
}

/// Error returned by every client-side API call.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ClientError {
    /// The backend answered with a failure status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The payload was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// Field-level messages, whether they came from the backend or from
    /// local validation.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Api(err) => err.errors(),
            Self::Validation(errors) => Some(errors.fields()),
            _ => None,
        }
    }

    /// First message reported for `field`, for inline form feedback.
    pub fn first_field_error(&self, field: &str) -> Option<&str> {
        self.field_errors()?
            .get(field)?
            .first()
            .map(String::as_str)
    }
}
