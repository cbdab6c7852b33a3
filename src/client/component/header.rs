use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{auth::sign_out, browser::auth_client},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let user_name = auth_context.read().user().map(|u| u.name.clone());
    let fetch_completed = auth_context.read().is_resolved();

    let on_sign_out = move |_| {
        spawn(async move {
            if let Err(err) = sign_out(&auth_client()).await {
                tracing::warn!("Failed to sign out: {}", err);
            }
            auth_context.set(AuthState::NotLoggedIn);
            nav.push(Route::Login {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(name) = user_name {
                span {
                    class: "hidden sm:inline opacity-70",
                    "{name}"
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_sign_out,
                    "Sair"
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Entrar"
                }
                Link {
                    to: Route::Register {},
                    class: "btn btn-primary",
                    "Criar conta"
                }
            }
        }
    })
}
