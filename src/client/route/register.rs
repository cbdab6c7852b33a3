use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{auth::sign_up, browser::auth_client},
        component::{field_error, page::LoadingPage, FormError, Page, TextField},
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, AuthState},
            error::ClientError,
        },
        router::Route,
    },
    model::auth::SignUpDto,
};

#[component]
pub fn Register() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<ClientError>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if auth_context.is_authenticated() {
            nav.push(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = SignUpDto {
            name: name(),
            email: email(),
            password: password(),
        };

        submitting.set(true);
        spawn(async move {
            match sign_up(&auth_client(), &payload).await {
                Ok(_) => {
                    error.set(None);
                    auth_context.refresh();
                }
                Err(err) => {
                    tracing::debug!("Sign-up rejected: {}", err);
                    error.set(Some(err));
                }
            }
            submitting.set(false);
        });
    };

    let state = auth_context.read();
    let current_error = error();

    rsx! {
        Title { "Criar conta | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "card bg-base-200 w-full max-w-sm",
                        form {
                            class: "card-body",
                            onsubmit: on_submit,
                            h2 { class: "card-title text-2xl", "Criar conta" }
                            FormError { error: current_error.clone() }
                            TextField {
                                label: "Nome",
                                value: name,
                                error: field_error(&current_error, "name")
                            }
                            TextField {
                                label: "E-mail",
                                value: email,
                                input_type: "email",
                                error: field_error(&current_error, "email")
                            }
                            TextField {
                                label: "Senha",
                                value: password,
                                input_type: "password",
                                error: field_error(&current_error, "password")
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary mt-4",
                                disabled: submitting(),
                                if submitting() {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                }
                                "Criar conta"
                            }
                            p {
                                class: "text-sm text-center mt-2",
                                "Já tem conta? "
                                Link { to: Route::Login {}, class: "link link-primary", "Entrar" }
                            }
                        }
                    }
                }
            }
        }
    }
}
