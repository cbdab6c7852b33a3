use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

/// Page chrome around every route: header, content and footer.
#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "min-h-screen flex flex-col bg-base-100",
            Header {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            footer {
                class: "footer footer-center p-4 text-base-content/60 text-sm",
                "{SITE_NAME}"
            }
        }
    )
}
