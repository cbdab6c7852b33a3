use crate::server::error::AppError;

/// Builds the HTTP client used for all proxied requests.
///
/// Redirects are not followed so that `Location` headers reach the browser
/// untouched, and system proxies are ignored since the backend is addressed
/// directly.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready to be shared through `AppState`
/// - `Err(AppError::ReqwestErr(_))` - The TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()?;

    Ok(client)
}
