use dioxus::prelude::*;

use crate::client::model::error::ClientError;

/// First message for `field`, if the last submission reported one.
pub fn field_error(error: &Option<ClientError>, field: &str) -> Option<String> {
    error
        .as_ref()
        .and_then(|err| err.first_field_error(field))
        .map(str::to_string)
}

/// Labelled input bound to a string signal, with inline error feedback.
#[component]
pub fn TextField(
    label: String,
    mut value: Signal<String>,
    error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = None)] step: Option<String>,
) -> Element {
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(
        label {
            class: "form-control w-full",
            div {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                r#type: "{input_type}",
                class: input_class,
                value: "{value}",
                step: step,
                disabled,
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(message) = error {
                div {
                    class: "label",
                    span { class: "label-text-alt text-error", "{message}" }
                }
            }
        }
    )
}

/// Message for failures that are not tied to a single field.
#[component]
pub fn FormError(error: Option<ClientError>) -> Element {
    let message = error
        .filter(|err| err.field_errors().is_none())
        .map(|err| err.to_string());

    rsx!(
        if let Some(message) = message {
            div {
                class: "alert alert-error my-2",
                span { "{message}" }
            }
        }
    )
}
