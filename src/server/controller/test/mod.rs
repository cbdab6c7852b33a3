use axum::http::{
    header::{CACHE_CONTROL, CONTENT_TYPE, COOKIE, ORIGIN, SET_COOKIE},
    StatusCode,
};
use serde_json::{json, Value};
use test_utils::{
    builder::BackendBuilder,
    server::{spawn_router, unreachable_url},
};

use crate::server::{
    error::AppError, router::router, startup::setup_reqwest_client, state::AppState,
};

mod proxy;

/// Serves the proxy routes against `backend_url` and returns the proxy's base URL.
async fn spawn_proxy(backend_url: &str) -> String {
    let state = AppState::new(setup_reqwest_client().unwrap(), backend_url.to_string());

    spawn_router(router().with_state(state)).await.unwrap()
}

/// Browser stand-in that neither follows redirects nor uses system proxies.
fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
