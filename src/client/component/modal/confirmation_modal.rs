use dioxus::prelude::*;

use crate::client::model::error::ClientError;

use super::Modal;

/// Yes/no dialog for destructive actions.
///
/// A failed confirmation keeps the dialog open and shows `error` above the
/// buttons so the user can retry or cancel.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: Element,
    confirm_text: String,
    confirm_class: String,
    is_processing: bool,
    processing_text: String,
    #[props(default)] error: Option<ClientError>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            {message}
            if let Some(error) = error {
                div {
                    role: "alert",
                    class: "alert alert-error mt-4",
                    span { "{error}" }
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| show.set(false),
                    disabled: is_processing,
                    "Cancelar"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "{processing_text}"
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
