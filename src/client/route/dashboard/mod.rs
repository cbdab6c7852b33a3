mod affiliate;
mod member;
mod plan;
mod ranking;

use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

use affiliate::AffiliatesSection;
use member::MembersSection;
use plan::PlansSection;
use ranking::RankingSection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Plans,
    Members,
    Affiliates,
    Ranking,
}

impl DashboardTab {
    const ALL: [DashboardTab; 4] = [
        DashboardTab::Plans,
        DashboardTab::Members,
        DashboardTab::Affiliates,
        DashboardTab::Ranking,
    ];

    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Plans => "Planos",
            DashboardTab::Members => "Membros",
            DashboardTab::Affiliates => "Afiliados",
            DashboardTab::Ranking => "Ranking",
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let mut active_tab = use_signal(|| DashboardTab::Plans);

    rsx! {
        Title { "Painel | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                div {
                    role: "tablist",
                    class: "tabs tabs-bordered mb-6",
                    for tab in DashboardTab::ALL {
                        a {
                            key: "{tab.label()}",
                            role: "tab",
                            class: if active_tab() == tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }
                match active_tab() {
                    DashboardTab::Plans => rsx! { PlansSection {} },
                    DashboardTab::Members => rsx! { MembersSection {} },
                    DashboardTab::Affiliates => rsx! { AffiliatesSection {} },
                    DashboardTab::Ranking => rsx! { RankingSection {} },
                }
            }
        }
    }
}

/// Card wrapper shared by the dashboard sections.
#[component]
fn Section(title: String, action: Option<Element>, children: Element) -> Element {
    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-center mb-4",
                    h2 { class: "card-title", "{title}" }
                    {action}
                }
                {children}
            }
        }
    )
}

/// Loading, error and empty states of a collection section.
#[component]
fn CollectionStatus(
    is_loading: bool,
    error: Option<crate::client::model::error::ClientError>,
    is_empty: bool,
    empty_message: String,
) -> Element {
    rsx!(
        if let Some(err) = error {
            div {
                class: "alert alert-error",
                span { "{err}" }
            }
        } else if is_loading && is_empty {
            div {
                class: "text-center py-8",
                span { class: "loading loading-spinner loading-lg" }
            }
        } else if is_empty {
            div {
                class: "text-center py-8 opacity-50",
                "{empty_message}"
            }
        }
    )
}

fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}
