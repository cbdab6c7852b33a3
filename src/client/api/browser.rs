use crate::client::{
    api::helper::{ApiClient, RawRequest, RawResponse, Transport, AUTH_BASE},
    model::error::ClientError,
};

/// `fetch`-backed transport that always sends the browser's credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[cfg(feature = "web")]
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ClientError> {
        use crate::client::api::helper::Method;
        use reqwasm::http::{Method as HttpMethod, Request, RequestCredentials};

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };

        let mut outbound = Request::new(&request.url)
            .method(method)
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json");
        if let Some(body) = request.body {
            outbound = outbound.body(body);
        }

        let response = outbound
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable body is treated as empty so error mapping can fall back
        let body = response.text().await.unwrap_or_default();

        Ok(RawResponse { status, body })
    }

    #[cfg(not(feature = "web"))]
    async fn send(&self, request: RawRequest) -> Result<RawResponse, ClientError> {
        Err(ClientError::Network(format!(
            "{} {} can only be sent from the browser",
            request.method, request.url
        )))
    }
}

/// Client for entity endpoints behind the general proxy.
pub fn api_client() -> ApiClient<BrowserTransport> {
    ApiClient::new(BrowserTransport)
}

/// Client for the authentication provider behind the auth proxy.
pub fn auth_client() -> ApiClient<BrowserTransport> {
    ApiClient::with_base(BrowserTransport, AUTH_BASE)
}
