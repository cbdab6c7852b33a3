pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

const TITLE_ID: &str = "modal-title";

/// DaisyUI dialog shown while `show` is set.
///
/// Escape, the backdrop and the close button all hide it unless
/// `prevent_close` is set, e.g. while a request is in flight.
#[component]
pub fn Modal(
    mut show: Signal<bool>,
    title: String,
    prevent_close: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or("max-w-lg");

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": TITLE_ID,
            "aria-hidden": if show() { "false" } else { "true" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 {class}",
                header {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        id: TITLE_ID,
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-circle btn-ghost",
                        "aria-label": "Fechar",
                        title: "Fechar",
                        disabled: prevent_close,
                        onclick: move |_| close(),
                        "✕"
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
