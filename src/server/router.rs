use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::proxy::{proxy_api, proxy_auth},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/proxy/{*path}",
            get(proxy_api)
                .post(proxy_api)
                .put(proxy_api)
                .patch(proxy_api)
                .delete(proxy_api),
        )
        .route(
            "/api/auth/{*path}",
            get(proxy_auth)
                .post(proxy_auth)
                .put(proxy_auth)
                .patch(proxy_auth)
                .delete(proxy_auth),
        )
        .layer(TraceLayer::new_for_http())
}
