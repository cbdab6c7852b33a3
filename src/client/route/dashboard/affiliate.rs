use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaPlus, FaTrash},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        action::affiliate::{create_affiliate, delete_affiliate, update_affiliate},
        api::browser::api_client,
        component::{field_error, ConfirmationModal, CursorPagination, FormError, Modal, TextField},
        constant::PAGE_SIZE,
        hook::{use_affiliates, use_members_by_affiliate},
        model::error::ClientError,
    },
    model::affiliate::{AffiliateDto, CreateAffiliateDto, UpdateAffiliateDto},
};

use super::{CollectionStatus, Section};

#[component]
pub fn AffiliatesSection() -> Element {
    let cursor = use_signal(|| None::<String>);
    let history = use_signal(Vec::<Option<String>>::new);
    let affiliates = use_affiliates(cursor, PAGE_SIZE);

    let mut show_form = use_signal(|| false);
    let mut affiliate_to_edit = use_signal(|| None::<AffiliateDto>);
    let mut show_details = use_signal(|| false);
    let mut affiliate_to_view = use_signal(|| None::<AffiliateDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut affiliate_to_delete = use_signal(|| None::<AffiliateDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ClientError>);

    let items = affiliates.items();

    let on_delete = move |_| {
        let Some(affiliate) = affiliate_to_delete() else {
            return;
        };
        delete_error.set(None);
        is_deleting.set(true);
        spawn(async move {
            match delete_affiliate(&api_client(), &affiliate.id).await {
                Ok(()) => {
                    affiliates.mutate();
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::warn!("Failed to delete affiliate: {}", err);
                    delete_error.set(Some(err));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx!(
        Section {
            title: "Afiliados",
            action: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        affiliate_to_edit.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Novo afiliado"
                }
            },
            CollectionStatus {
                is_loading: affiliates.is_loading(),
                error: affiliates.error(),
                is_empty: items.is_empty(),
                empty_message: "Nenhum afiliado cadastrado"
            }
            if !items.is_empty() {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Nome" }
                                th { "Código" }
                                th { class: "text-right", "Ações" }
                            }
                        }
                        tbody {
                            for affiliate in items.iter() {
                                {
                                    let affiliate_for_view = affiliate.clone();
                                    let affiliate_for_edit = affiliate.clone();
                                    let affiliate_for_delete = affiliate.clone();
                                    rsx! {
                                        tr {
                                            key: "{affiliate.id}",
                                            td {
                                                button {
                                                    class: "link link-hover",
                                                    onclick: move |_| {
                                                        affiliate_to_view.set(Some(affiliate_for_view.clone()));
                                                        show_details.set(true);
                                                    },
                                                    "{affiliate.name}"
                                                }
                                            }
                                            td { span { class: "badge badge-outline", "{affiliate.code}" } }
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| {
                                                            affiliate_to_edit.set(Some(affiliate_for_edit.clone()));
                                                            show_form.set(true);
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaPen }
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            affiliate_to_delete.set(Some(affiliate_for_delete.clone()));
                                                            delete_error.set(None);
                                                            show_delete_modal.set(true);
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaTrash }
                                                    }
                                                }
                                            }
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
                next_cursor: affiliates.next_cursor(),
                has_more: affiliates.has_more()
            }
        }

        if show_form() {
            AffiliateFormModal {
                show: show_form,
                affiliate: affiliate_to_edit(),
                on_saved: move |_| affiliates.mutate()
            }
        }

        if let Some(affiliate) = affiliate_to_view() {
            if show_details() {
                AffiliateDetailsModal { show: show_details, affiliate }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Excluir afiliado".to_string(),
            message: rsx!(
                p {
                    "Excluir o afiliado "
                    strong { {affiliate_to_delete().map(|a| a.name).unwrap_or_default()} }
                    "? Membros indicados por ele ficarão sem afiliado."
                }
            ),
            confirm_text: "Excluir".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            error: delete_error(),
            processing_text: "Excluindo...".to_string(),
            on_confirm: on_delete
        }
    )
}

#[component]
fn AffiliateFormModal(
    mut show: Signal<bool>,
    affiliate: Option<AffiliateDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let editing_id = affiliate.as_ref().map(|a| a.id.clone());
    let title = if editing_id.is_some() { "Editar afiliado" } else { "Novo afiliado" };

    let name = use_signal(|| affiliate.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let code = use_signal(|| affiliate.as_ref().map(|a| a.code.clone()).unwrap_or_default());
    let mut error = use_signal(|| None::<ClientError>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let editing_id = editing_id.clone();

        submitting.set(true);
        spawn(async move {
            let client = api_client();
            let result = match editing_id {
                Some(id) => {
                    let payload = UpdateAffiliateDto {
                        name: Some(name()),
                        code: Some(code().trim().to_string()),
                    };
                    update_affiliate(&client, &id, payload).await
                }
                None => {
                    let payload = CreateAffiliateDto {
                        name: name(),
                        code: code().trim().to_string(),
                        user_id: None,
                    };
                    create_affiliate(&client, payload).await
                }
            };

            match result {
                Ok(_) => {
                    error.set(None);
                    show.set(false);
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::debug!("Affiliate form rejected: {}", err);
                    error.set(Some(err));
                }
            }
            submitting.set(false);
        });
    };

    let current_error = error();

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-2",
                onsubmit: on_submit,
                FormError { error: current_error.clone() }
                TextField { label: "Nome", value: name, error: field_error(&current_error, "nome") }
                TextField { label: "Código", value: code, error: field_error(&current_error, "codigo") }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: submitting(),
                        onclick: move |_| show.set(false),
                        "Cancelar"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Salvar"
                    }
                }
            }
        }
    )
}

/// Affiliate with the members it referred.
#[component]
fn AffiliateDetailsModal(show: Signal<bool>, affiliate: AffiliateDto) -> Element {
    let affiliate_id = use_signal(|| affiliate.id.clone());
    let cursor = use_signal(|| None::<String>);
    let history = use_signal(Vec::<Option<String>>::new);
    let members = use_members_by_affiliate(affiliate_id, cursor, PAGE_SIZE);

    let items = members.items();
    // Counted across the pages walked so far
    let referral_count = history.read().len() * PAGE_SIZE as usize + items.len();
    let count_display = if members.has_more() {
        format!("{}+", referral_count)
    } else {
        referral_count.to_string()
    };

    rsx!(
        Modal {
            show,
            title: affiliate.name.clone(),
            prevent_close: false,
            div {
                class: "flex gap-4 mb-4",
                div {
                    class: "stat p-0",
                    div { class: "stat-title", "Código" }
                    div { class: "stat-value text-lg", "{affiliate.code}" }
                }
                div {
                    class: "stat p-0",
                    div { class: "stat-title", "Indicações" }
                    div { class: "stat-value text-lg", "{count_display}" }
                }
            }
            CollectionStatus {
                is_loading: members.is_loading(),
                error: members.error(),
                is_empty: items.is_empty(),
                empty_message: "Nenhum membro indicado"
            }
            ul {
                class: "list-disc pl-6",
                for member in items.iter() {
                    li { key: "{member.id}", "{member.name} · {member.email}" }
                }
            }
            CursorPagination {
                cursor,
                history,
                next_cursor: members.next_cursor(),
                has_more: members.has_more()
            }
        }
    )
}
