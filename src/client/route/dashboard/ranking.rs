use dioxus::prelude::*;

use crate::client::{
    component::CursorPagination, constant::PAGE_SIZE, hook::use_affiliate_ranking,
};

use super::{CollectionStatus, Section};

/// Affiliates ordered by the number of members they referred.
#[component]
pub fn RankingSection() -> Element {
    let cursor = use_signal(|| None::<String>);
    let history = use_signal(Vec::<Option<String>>::new);
    let ranking = use_affiliate_ranking(cursor, PAGE_SIZE);

    let items = ranking.items();
    let offset = history.read().len() * PAGE_SIZE as usize;

    rsx!(
        Section {
            title: "Ranking de afiliados",
            CollectionStatus {
                is_loading: ranking.is_loading(),
                error: ranking.error(),
                is_empty: items.is_empty(),
                empty_message: "Nenhuma indicação registrada"
            }
            if !items.is_empty() {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "#" }
                                th { "Afiliado" }
                                th { "Código" }
                                th { class: "text-right", "Indicações" }
                            }
                        }
                        tbody {
                            for (index, entry) in items.iter().enumerate() {
                                {
                                    let position = offset + index + 1;
                                    rsx! {
                                        tr {
                                            key: "{entry.affiliate.id}",
                                            td { "{position}" }
                                            td { "{entry.affiliate.name}" }
                                            td { span { class: "badge badge-outline", "{entry.affiliate.code}" } }
                                            td { class: "text-right font-semibold", "{entry.indication_count}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            CursorPagination {
                cursor,
                history,
                next_cursor: ranking.next_cursor(),
                has_more: ranking.has_more()
            }
        }
    )
}
