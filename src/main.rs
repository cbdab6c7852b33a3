mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, middleware::session::route_guard, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let http_client = startup::setup_reqwest_client()?;

        tracing::info!("Starting server, proxying to {}", config.backend_url);

        let server_routes =
            server::router::router().with_state(AppState::new(http_client, config.backend_url));
        let router = dioxus::server::router(App)
            .merge(server_routes)
            .layer(axum::middleware::from_fn(route_guard));

        Ok(router)
    })
}
