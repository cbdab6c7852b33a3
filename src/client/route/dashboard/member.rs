use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaPlus, FaTrash},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        action::member::{create_member, delete_member, update_member},
        api::{browser::api_client, AffiliateService, PlanService},
        component::{field_error, ConfirmationModal, CursorPagination, FormError, Modal, TextField},
        constant::PAGE_SIZE,
        hook::{use_affiliates, use_members, use_plans},
        model::error::ClientError,
    },
    model::member::{CreateMemberDto, MemberDto, UpdateMemberDto},
};

use super::{format_price, CollectionStatus, Section};

/// Options offered by the plan and affiliate selects.
const OPTION_LIMIT: u32 = 100;

#[component]
pub fn MembersSection() -> Element {
    let cursor = use_signal(|| None::<String>);
    let history = use_signal(Vec::<Option<String>>::new);
    let members = use_members(cursor, PAGE_SIZE);

    let mut show_form = use_signal(|| false);
    let mut member_to_edit = use_signal(|| None::<MemberDto>);
    let mut show_details = use_signal(|| false);
    let mut member_to_view = use_signal(|| None::<MemberDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut member_to_delete = use_signal(|| None::<MemberDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ClientError>);

    let items = members.items();

    let on_delete = move |_| {
        let Some(member) = member_to_delete() else {
            return;
        };
        delete_error.set(None);
        is_deleting.set(true);
        spawn(async move {
            match delete_member(&api_client(), &member.id).await {
                Ok(()) => {
                    members.mutate();
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::warn!("Failed to delete member: {}", err);
                    delete_error.set(Some(err));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx!(
        Section {
            title: "Membros",
            action: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        member_to_edit.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Novo membro"
                }
            },
            CollectionStatus {
                is_loading: members.is_loading(),
                error: members.error(),
                is_empty: items.is_empty(),
                empty_message: "Nenhum membro cadastrado"
            }
            if !items.is_empty() {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Nome" }
                                th { "E-mail" }
                                th { "Telefone" }
                                th { class: "text-right", "Ações" }
                            }
                        }
                        tbody {
                            for member in items.iter() {
                                {
                                    let member_for_view = member.clone();
                                    let member_for_edit = member.clone();
                                    let member_for_delete = member.clone();
                                    rsx! {
                                        tr {
                                            key: "{member.id}",
                                            td {
                                                button {
                                                    class: "link link-hover",
                                                    onclick: move |_| {
                                                        member_to_view.set(Some(member_for_view.clone()));
                                                        show_details.set(true);
                                                    },
                                                    "{member.name}"
                                                }
                                            }
                                            td { "{member.email}" }
                                            td { "{member.phone}" }
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| {
                                                            member_to_edit.set(Some(member_for_edit.clone()));
                                                            show_form.set(true);
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaPen }
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            member_to_delete.set(Some(member_for_delete.clone()));
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
                next_cursor: members.next_cursor(),
                has_more: members.has_more()
            }
        }

        if show_form() {
            MemberFormModal {
                show: show_form,
                member: member_to_edit(),
                on_saved: move |_| members.mutate()
            }
        }

        if let Some(member) = member_to_view() {
            if show_details() {
                MemberDetailsModal { show: show_details, member }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Excluir membro".to_string(),
            message: rsx!(
                p {
                    "Excluir o membro "
                    strong { {member_to_delete().map(|m| m.name).unwrap_or_default()} }
                    "? Esta ação não pode ser desfeita."
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
fn MemberFormModal(
    mut show: Signal<bool>,
    member: Option<MemberDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let editing_id = member.as_ref().map(|m| m.id.clone());
    let title = if editing_id.is_some() { "Editar membro" } else { "Novo membro" };

    let name = use_signal(|| member.as_ref().map(|m| m.name.clone()).unwrap_or_default());
    let email = use_signal(|| member.as_ref().map(|m| m.email.clone()).unwrap_or_default());
    let phone = use_signal(|| member.as_ref().map(|m| m.phone.clone()).unwrap_or_default());
    let mut plan_id = use_signal(|| member.as_ref().map(|m| m.plan_id.clone()).unwrap_or_default());
    let mut affiliate_id = use_signal(|| {
        member
            .as_ref()
            .and_then(|m| m.affiliate_id.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<ClientError>);
    let mut submitting = use_signal(|| false);

    let plans = use_plans(use_signal(|| None), OPTION_LIMIT);
    let affiliates = use_affiliates(use_signal(|| None), OPTION_LIMIT);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let editing_id = editing_id.clone();

        submitting.set(true);
        spawn(async move {
            let client = api_client();
            let result = match editing_id {
                Some(id) => {
                    let payload = UpdateMemberDto {
                        name: Some(name()),
                        email: Some(email()),
                        phone: Some(phone()),
                        plan_id: Some(plan_id()),
                        affiliate_id: Some(Some(affiliate_id())),
                    };
                    update_member(&client, &id, payload).await
                }
                None => {
                    let payload = CreateMemberDto {
                        name: name(),
                        email: email(),
                        phone: phone(),
                        plan_id: plan_id(),
                        affiliate_id: Some(affiliate_id()),
                    };
                    create_member(&client, payload).await
                }
            };

            match result {
                Ok(_) => {
                    error.set(None);
                    show.set(false);
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::debug!("Member form rejected: {}", err);
                    error.set(Some(err));
                }
            }
            submitting.set(false);
        });
    };

    let current_error = error();
    let plan_error = field_error(&current_error, "planoId");
    let affiliate_error = field_error(&current_error, "afiliadoId");

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
                TextField {
                    label: "E-mail",
                    value: email,
                    input_type: "email",
                    error: field_error(&current_error, "email")
                }
                TextField {
                    label: "Telefone",
                    value: phone,
                    input_type: "tel",
                    error: field_error(&current_error, "telefone")
                }
                label {
                    class: "form-control w-full",
                    div { class: "label", span { class: "label-text", "Plano" } }
                    select {
                        class: "select select-bordered w-full",
                        value: "{plan_id}",
                        onchange: move |evt| plan_id.set(evt.value()),
                        option { value: "", disabled: true, "Selecione um plano" }
                        for plan in plans.items() {
                            {
                                let label = format!("{} ({})", plan.name, format_price(plan.monthly_price));
                                rsx! {
                                    option {
                                        key: "{plan.id}",
                                        value: "{plan.id}",
                                        selected: plan.id == plan_id(),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                    if let Some(message) = plan_error {
                        div { class: "label", span { class: "label-text-alt text-error", "{message}" } }
                    }
                }
                label {
                    class: "form-control w-full",
                    div { class: "label", span { class: "label-text", "Afiliado" } }
                    select {
                        class: "select select-bordered w-full",
                        value: "{affiliate_id}",
                        onchange: move |evt| affiliate_id.set(evt.value()),
                        option { value: "", "Sem afiliado" }
                        for affiliate in affiliates.items() {
                            option {
                                key: "{affiliate.id}",
                                value: "{affiliate.id}",
                                selected: affiliate.id == affiliate_id(),
                                "{affiliate.name} ({affiliate.code})"
                            }
                        }
                    }
                    if let Some(message) = affiliate_error {
                        div { class: "label", span { class: "label-text-alt text-error", "{message}" } }
                    }
                }
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

/// Member record with its plan and referring affiliate resolved.
#[component]
fn MemberDetailsModal(show: Signal<bool>, member: MemberDto) -> Element {
    let plan_id = member.plan_id.clone();
    let affiliate_id = member.affiliate_id.clone();

    let plan = use_resource(move || {
        let plan_id = plan_id.clone();
        async move { api_client().get_plan(&plan_id).await }
    });
    let affiliate = use_resource(move || {
        let affiliate_id = affiliate_id.clone();
        async move {
            match affiliate_id {
                Some(id) => api_client().get_affiliate(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let plan_display = match &*plan.read() {
        Some(Ok(plan)) => format!("{} ({})", plan.name, format_price(plan.monthly_price)),
        Some(Err(err)) => format!("Indisponível: {}", err),
        None => "Carregando...".to_string(),
    };
    let affiliate_display = match &*affiliate.read() {
        Some(Ok(Some(affiliate))) => format!("{} ({})", affiliate.name, affiliate.code),
        Some(Ok(None)) => "Sem afiliado".to_string(),
        Some(Err(err)) => format!("Indisponível: {}", err),
        None => "Carregando...".to_string(),
    };
    let created_at = member.created_at.format("%d/%m/%Y %H:%M").to_string();

    rsx!(
        Modal {
            show,
            title: member.name.clone(),
            prevent_close: false,
            dl {
                class: "grid grid-cols-3 gap-2",
                dt { class: "font-semibold", "E-mail" }
                dd { class: "col-span-2", "{member.email}" }
                dt { class: "font-semibold", "Telefone" }
                dd { class: "col-span-2", "{member.phone}" }
                dt { class: "font-semibold", "Plano" }
                dd { class: "col-span-2", "{plan_display}" }
                dt { class: "font-semibold", "Afiliado" }
                dd { class: "col-span-2", "{affiliate_display}" }
                dt { class: "font-semibold", "Cadastro" }
                dd { class: "col-span-2", "{created_at} UTC" }
            }
        }
    )
}
