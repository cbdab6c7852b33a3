//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through
//! Axum's state extraction. Nothing in it changes after startup.

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for outbound requests to the backend.
    ///
    /// Configured with redirects disabled so that backend redirects are relayed
    /// to the browser instead of being followed server-side.
    pub http_client: reqwest::Client,

    /// Origin of the backend API, e.g. `http://localhost:3333`.
    pub backend_url: String,
}

impl AppState {
    pub fn new(http_client: reqwest::Client, backend_url: String) -> Self {
        Self {
            http_client,
            backend_url,
        }
    }
}
