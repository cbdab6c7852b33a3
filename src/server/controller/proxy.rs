use axum::{
    extract::{Request, State},
    response::Response,
};

use crate::server::{
    error::{proxy::ProxyError, AppError},
    service::proxy::{relay_response, ProxyRequest, ProxyScope, ProxyService},
    state::AppState,
};

/// Forwards `/api/proxy/*` to the backend API.
///
/// # Returns
/// - The backend's response, relayed unmodified
/// - 413 Payload Too Large - The request body exceeds `MAX_BODY_BYTES`
/// - 500 Internal Server Error - The backend could not be reached
pub async fn proxy_api(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let proxy_service = ProxyService::new(&state.http_client, &state.backend_url);
    let proxy_request =
        ProxyRequest::from_request(request, ProxyScope::Api, &state.backend_url).await?;

    let response = proxy_service.forward(proxy_request).await?;

    relay_response(response).await
}

/// Forwards `/api/auth/*` to the authentication provider.
///
/// # Returns
/// - The provider's response, relayed unmodified
/// - 413 Payload Too Large - The request body exceeds `MAX_BODY_BYTES`
/// - 502 Bad Gateway - The provider could not be reached
pub async fn proxy_auth(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let proxy_service = ProxyService::new(&state.http_client, &state.backend_url);
    let proxy_request =
        ProxyRequest::from_request(request, ProxyScope::Auth, &state.backend_url).await?;

    let response = proxy_service
        .forward(proxy_request)
        .await
        .map_err(ProxyError::AuthUnreachable)?;

    relay_response(response).await
}
