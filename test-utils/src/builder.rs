use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, StatusCode},
    response::Response,
    Router,
};
use tokio::sync::Mutex;

use crate::{
    backend::{MockBackend, RecordedRequest},
    error::TestError,
    server::spawn_router,
};

/// Builder for a mock backend answering every request with one canned response.
///
/// # Example
///
/// ```rust,ignore
/// let backend = BackendBuilder::new()
///     .status(201)
///     .header("set-cookie", "a=1")
///     .json(r#"{"id":"1"}"#)
///     .build()
///     .await?;
/// ```
pub struct BackendBuilder {
    /// Status code of every response.
    status: u16,

    /// Response headers in insertion order; names may repeat.
    headers: Vec<(String, String)>,

    /// Response body, sent verbatim.
    body: String,
}

#[derive(Clone)]
struct BackendState {
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Bytes,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl BackendBuilder {
    /// Creates a builder answering `200` with an empty body.
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Adds a response header; repeated names produce repeated headers.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Sets a JSON body along with its content type.
    pub fn json(self, body: &str) -> Self {
        self.header(CONTENT_TYPE.as_str(), "application/json")
            .body(body)
    }

    /// Starts the backend on an ephemeral local port.
    ///
    /// # Returns
    /// - `Ok(MockBackend)` - Running backend with an empty request log
    /// - `Err(TestError::InvalidResponse)` - Status or headers are not valid HTTP
    /// - `Err(TestError::Io)` - No local port could be bound
    pub async fn build(self) -> Result<MockBackend, TestError> {
        let status = StatusCode::from_u16(self.status)
            .map_err(|e| TestError::InvalidResponse(e.to_string()))?;

        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                let name = HeaderName::try_from(name.as_str())
                    .map_err(|e| TestError::InvalidResponse(e.to_string()))?;
                let value = HeaderValue::try_from(value.as_str())
                    .map_err(|e| TestError::InvalidResponse(e.to_string()))?;
                Ok((name, value))
            })
            .collect::<Result<Vec<_>, TestError>>()?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = BackendState {
            status,
            headers,
            body: Bytes::from(self.body),
            requests: requests.clone(),
        };

        let router = Router::new().fallback(respond).with_state(state);
        let url = spawn_router(router).await?;

        Ok(MockBackend { url, requests })
    }
}

impl Default for BackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Records the request, then answers with the canned response.
async fn respond(State(state): State<BackendState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map(|bytes| bytes.to_vec())
        .unwrap_or_default();

    state.requests.lock().await.push(RecordedRequest {
        method: parts.method,
        uri: parts.uri,
        headers: parts.headers,
        body,
    });

    let mut response = Response::new(Body::from(state.body.clone()));
    *response.status_mut() = state.status;
    for (name, value) in &state.headers {
        response.headers_mut().append(name.clone(), value.clone());
    }

    response
}
