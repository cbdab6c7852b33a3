//! Forwarding of same-origin API calls to the backend.
//!
//! The browser only ever talks to this server; requests under `/api/proxy`
//! and `/api/auth` are re-issued against the backend with the caller's
//! cookies, and the backend's answer is relayed back byte for byte so that
//! its `Set-Cookie` headers land on this origin.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE, COOKIE, ORIGIN, SET_COOKIE, TRANSFER_ENCODING},
        HeaderMap, Method,
    },
    response::Response,
};
use dioxus_logger::tracing;

use crate::server::error::{proxy::ProxyError, AppError};

/// Largest request body forwarded to the backend, matching axum's default limit.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Which proxy a request came through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProxyScope {
    /// Entity endpoints, `/api/proxy/*` → `<backend>/api/*`
    Api,
    /// Authentication provider, `/api/auth/*` → `<backend>/api/auth/*`
    Auth,
}

impl ProxyScope {
    pub fn inbound_prefix(&self) -> &'static str {
        match self {
            ProxyScope::Api => "/api/proxy",
            ProxyScope::Auth => "/api/auth",
        }
    }

    pub fn outbound_prefix(&self) -> &'static str {
        match self {
            ProxyScope::Api => "/api",
            ProxyScope::Auth => "/api/auth",
        }
    }
}

/// Builds the backend URL for `path`, appending the raw query when present.
pub fn target_url(backend_url: &str, scope: ProxyScope, path: &str, query: Option<&str>) -> String {
    let mut url = format!(
        "{}{}/{}",
        backend_url,
        scope.outbound_prefix(),
        path.trim_start_matches('/')
    );

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }

    url
}

/// Joins every caller cookie into a single `Cookie` header value.
///
/// Pieces from all `Cookie` headers are trimmed and kept in order; `None` when
/// the caller sent no cookies.
pub fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<&str> = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty())
        .collect();

    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}

/// Everything needed to re-issue an inbound request against the backend.
#[derive(Debug)]
pub struct ProxyRequest {
    pub method: Method,
    pub url: String,
    pub cookie: Option<String>,
    pub body: Option<Bytes>,
}

impl ProxyRequest {
    /// Captures method, target URL, cookies and body of an inbound request.
    ///
    /// GET and HEAD never carry a body.
    ///
    /// # Returns
    /// - `Ok(ProxyRequest)` - Request ready to be forwarded
    /// - `Err(ProxyError::BodyTooLarge)` - Body over [`MAX_BODY_BYTES`] or unreadable
    pub async fn from_request(
        request: Request,
        scope: ProxyScope,
        backend_url: &str,
    ) -> Result<Self, ProxyError> {
        let (parts, body) = request.into_parts();

        let path = parts.uri.path();
        let sub_path = path.strip_prefix(scope.inbound_prefix()).unwrap_or(path);
        let url = target_url(backend_url, scope, sub_path, parts.uri.query());
        let cookie = cookie_header(&parts.headers);

        let body = if parts.method == Method::GET || parts.method == Method::HEAD {
            None
        } else {
            let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|err| {
                    tracing::debug!("Failed to read request body for {}: {}", url, err);
                    ProxyError::BodyTooLarge(MAX_BODY_BYTES)
                })?;
            Some(bytes).filter(|bytes| !bytes.is_empty())
        };

        Ok(Self {
            method: parts.method,
            url,
            cookie,
            body,
        })
    }
}

pub struct ProxyService<'a> {
    http_client: &'a reqwest::Client,
    backend_url: &'a str,
}

impl<'a> ProxyService<'a> {
    pub fn new(http_client: &'a reqwest::Client, backend_url: &'a str) -> Self {
        Self {
            http_client,
            backend_url,
        }
    }

    /// Sends the request to the backend.
    ///
    /// # Returns
    /// - `Ok(reqwest::Response)` - The backend answered, whatever its status
    /// - `Err(reqwest::Error)` - No answer could be obtained
    pub async fn forward(&self, request: ProxyRequest) -> Result<reqwest::Response, reqwest::Error> {
        tracing::debug!("Proxying {} {}", request.method, request.url);

        let mut outbound = self
            .http_client
            .request(request.method, &request.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ORIGIN, self.backend_url)
            .header(CACHE_CONTROL, "no-store");

        if let Some(cookie) = request.cookie {
            outbound = outbound.header(COOKIE, cookie);
        }
        if let Some(body) = request.body {
            outbound = outbound.body(body);
        }

        outbound.send().await
    }
}

/// Converts a backend response into the response sent to the browser.
///
/// Status and body are preserved. Every header is copied except
/// `Transfer-Encoding`, and each `Set-Cookie` value is relayed separately.
pub async fn relay_response(response: reqwest::Response) -> Result<Response, AppError> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .bytes()
        .await
        .map_err(|e| ProxyError::Relay(e.to_string()))?;

    let mut builder = Response::builder().status(status);
    for (name, value) in headers.iter() {
        if name == TRANSFER_ENCODING || name == SET_COOKIE {
            continue;
        }
        builder = builder.header(name, value);
    }
    for cookie in headers.get_all(SET_COOKIE) {
        builder = builder.header(SET_COOKIE, cookie);
    }

    let response = builder
        .body(Body::from(body))
        .map_err(|e| ProxyError::Relay(e.to_string()))?;

    Ok(response)
}
