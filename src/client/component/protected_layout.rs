use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout {}
    }
}

/// Renders nested routes only once a session is confirmed.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let fetch_completed = auth_context.read().is_resolved();
    let user_logged_in = auth_context.is_authenticated();

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Initializing => rsx! { LoadingPage {} },
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            AuthState::Error(err) => rsx! {
                ErrorPage {
                    status: err.status_code().unwrap_or(500),
                    message: err.to_string()
                }
            },
            // Render nothing while redirecting
            AuthState::NotLoggedIn => rsx! {},
        }
    }
}
