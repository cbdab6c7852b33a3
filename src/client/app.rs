use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";
const TAILWIND_JS: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    use_context_provider(AuthContext::new);

    // Resolve the session once on first load
    #[cfg(feature = "web")]
    {
        let auth_context = use_context::<AuthContext>();
        use_hook(move || auth_context.refresh());
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Gestão de planos, membros e afiliados"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
