use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Title { "Página não encontrada | {SITE_NAME}" }
        ErrorPage { status: 404, message: format!("Nada encontrado em {}", path) }
    }
}
