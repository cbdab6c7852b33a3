use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const BACKEND_URL_VAR: &str = "BACKEND_URL";
const DEFAULT_BACKEND_URL: &str = "http://localhost:3333";

pub struct Config {
    /// Origin of the backend API, without a trailing `/`.
    pub backend_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let backend_url =
            std::env::var(BACKEND_URL_VAR).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        Self::new(&backend_url)
    }

    /// Validates `backend_url` as an http(s) URL.
    pub fn new(backend_url: &str) -> Result<Self, AppError> {
        let parsed = Url::parse(backend_url).map_err(|source| ConfigError::InvalidUrl {
            name: BACKEND_URL_VAR.to_string(),
            value: backend_url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                name: BACKEND_URL_VAR.to_string(),
                value: backend_url.to_string(),
            }
            .into());
        }

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        })
    }
}
