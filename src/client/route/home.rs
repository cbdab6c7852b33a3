use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, model::auth::AuthContext, router::Route};

/// Sends visitors to the dashboard or to the login page once the session is known.
#[component]
pub fn Home() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        let state = auth_context.read();
        if !state.is_resolved() {
            return;
        }
        if state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    });

    rsx! { LoadingPage {} }
}
