//! Typed fetch wrapper shared by every entity service.
//!
//! Requests go through the same-origin proxy so the browser's session cookies
//! reach the backend without being visible to script. Every call resolves to
//! either the decoded payload or a [`ClientError`].

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::client::model::error::{ApiError, ClientError};

/// Same-origin prefix of the general proxy.
pub const API_BASE: &str = "/api/proxy";
/// Same-origin prefix of the authentication proxy.
pub const AUTH_BASE: &str = "/api/auth";

/// Backend path marker callers may still carry in endpoints.
const API_MARKER: &str = "/api/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request as handed to a [`Transport`]; the body is already serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Status and unparsed body of a completed exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations only fail when no answer was received at all; non-2xx
/// statuses are successful exchanges at this level.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ClientError>;
}

/// Strips a leading `/api/` marker and ensures exactly one leading `/`.
///
/// `/api/plans` and `plans` both become `/plans`.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let cleaned = endpoint
        .strip_prefix(API_MARKER)
        .unwrap_or(endpoint)
        .trim_start_matches('/');

    format!("/{}", cleaned)
}

/// Decodes a 2xx body into `T`, or builds the typed error for anything else.
pub fn parse_response<T: DeserializeOwned>(response: RawResponse) -> Result<T, ClientError> {
    if response.is_success() {
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    } else {
        Err(ApiError::from_response(response.status, &response.body).into())
    }
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ClientError> {
    serde_json::to_string(payload).map_err(|e| ClientError::Serialize(e.to_string()))
}

/// JSON client rooted at one same-origin prefix.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

impl<T: Transport> ApiClient<T> {
    /// Client for the general proxy.
    pub fn new(transport: T) -> Self {
        Self::with_base(transport, API_BASE)
    }

    pub fn with_base(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base, normalize_endpoint(endpoint))
    }

    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<R, ClientError> {
        let request = RawRequest {
            method,
            url: self.url(endpoint),
            body,
        };

        let response = self.transport.send(request).await?;
        parse_response(response)
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        self.request(Method::Get, endpoint, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<R, ClientError> {
        let body = serialize_json(payload)?;
        self.request(Method::Post, endpoint, Some(body)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<R, ClientError> {
        let body = serialize_json(payload)?;
        self.request(Method::Put, endpoint, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        self.request(Method::Delete, endpoint, None).await
    }
}
