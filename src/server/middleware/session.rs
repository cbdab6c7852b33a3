//! Page guard based on the presence of the authentication provider's cookie.
//!
//! The cookie is only checked for presence; the backend remains responsible
//! for validating the session on every API call.

use axum::{
    extract::Request,
    http::{header::COOKIE, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;

/// Substrings identifying the provider's session cookies.
const SESSION_COOKIE_MARKERS: [&str; 2] = ["better-auth", "better_auth"];

const DASHBOARD_PATH: &str = "/dashboard";
const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/register";

/// Whether any caller cookie name looks like a provider session cookie.
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|cookie| cookie.trim().split('=').next())
        .any(|name| {
            SESSION_COOKIE_MARKERS
                .iter()
                .any(|marker| name.contains(marker))
        })
}

fn is_dashboard_path(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Redirect target for `path`, if the page does not fit the session state.
///
/// - `/dashboard` and below without a session → `/login`
/// - `/login` or `/register` with a session → `/dashboard`
pub fn guard_redirect(path: &str, has_session: bool) -> Option<&'static str> {
    if !has_session && is_dashboard_path(path) {
        return Some(LOGIN_PATH);
    }
    if has_session && (path == LOGIN_PATH || path == REGISTER_PATH) {
        return Some(DASHBOARD_PATH);
    }
    None
}

/// Redirects page requests according to [`guard_redirect`].
pub async fn route_guard(request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if let Some(target) = guard_redirect(path, has_session_cookie(request.headers())) {
        tracing::debug!("route_guard: redirecting {} to {}", path, target);
        return Redirect::temporary(target).into_response();
    }

    next.run(request).await
}
