use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaPlus, FaTrash},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        action::plan::{create_plan, delete_plan, update_plan},
        api::browser::api_client,
        component::{field_error, ConfirmationModal, CursorPagination, FormError, Modal, TextField},
        constant::PAGE_SIZE,
        hook::use_plans,
        model::error::ClientError,
    },
    model::plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
};

use super::{format_price, CollectionStatus, Section};

#[component]
pub fn PlansSection() -> Element {
    let cursor = use_signal(|| None::<String>);
    let history = use_signal(Vec::<Option<String>>::new);
    let plans = use_plans(cursor, PAGE_SIZE);

    let mut show_form = use_signal(|| false);
    let mut plan_to_edit = use_signal(|| None::<PlanDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut plan_to_delete = use_signal(|| None::<PlanDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<ClientError>);

    let items = plans.items();

    let on_delete = move |_| {
        let Some(plan) = plan_to_delete() else {
            return;
        };
        delete_error.set(None);
        is_deleting.set(true);
        spawn(async move {
            match delete_plan(&api_client(), &plan.id).await {
                Ok(()) => {
                    plans.mutate();
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::warn!("Failed to delete plan: {}", err);
                    delete_error.set(Some(err));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx!(
        Section {
            title: "Planos",
            action: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        plan_to_edit.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Novo plano"
                }
            },
            CollectionStatus {
                is_loading: plans.is_loading(),
                error: plans.error(),
                is_empty: items.is_empty(),
                empty_message: "Nenhum plano cadastrado"
            }
            if !items.is_empty() {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Nome" }
                                th { "Preço mensal" }
                                th { "Benefícios" }
                                th { class: "text-right", "Ações" }
                            }
                        }
                        tbody {
                            for plan in items.iter() {
                                {
                                    let plan_for_edit = plan.clone();
                                    let plan_for_delete = plan.clone();
                                    rsx! {
                                        tr {
                                            key: "{plan.id}",
                                            td { "{plan.name}" }
                                            td { {format_price(plan.monthly_price)} }
                                            td { class: "max-w-xs break-words", "{plan.benefits}" }
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-primary",
                                                        onclick: move |_| {
                                                            plan_to_edit.set(Some(plan_for_edit.clone()));
                                                            show_form.set(true);
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaPen }
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        onclick: move |_| {
                                                            plan_to_delete.set(Some(plan_for_delete.clone()));
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
                next_cursor: plans.next_cursor(),
                has_more: plans.has_more()
            }
        }

        if show_form() {
            PlanFormModal {
                show: show_form,
                plan: plan_to_edit(),
                on_saved: move |_| plans.mutate()
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Excluir plano".to_string(),
            message: rsx!(
                p {
                    "Excluir o plano "
                    strong { {plan_to_delete().map(|p| p.name).unwrap_or_default()} }
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

/// Create form when `plan` is `None`, edit form otherwise.
#[component]
fn PlanFormModal(mut show: Signal<bool>, plan: Option<PlanDto>, on_saved: EventHandler<()>) -> Element {
    let editing_id = plan.as_ref().map(|p| p.id.clone());
    let title = if editing_id.is_some() { "Editar plano" } else { "Novo plano" };

    let name = use_signal(|| plan.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let price = use_signal(|| {
        plan.as_ref()
            .map(|p| p.monthly_price.to_string())
            .unwrap_or_default()
    });
    let benefits = use_signal(|| plan.as_ref().map(|p| p.benefits.clone()).unwrap_or_default());
    let mut error = use_signal(|| None::<ClientError>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Unparsable input is left for validation to reject
        let monthly_price = price().trim().replace(',', ".").parse().unwrap_or(f64::NAN);
        let editing_id = editing_id.clone();

        submitting.set(true);
        spawn(async move {
            let client = api_client();
            let result = match editing_id {
                Some(id) => {
                    let payload = UpdatePlanDto {
                        name: Some(name()),
                        monthly_price: Some(monthly_price),
                        benefits: Some(benefits()),
                    };
                    update_plan(&client, &id, payload).await
                }
                None => {
                    let payload = CreatePlanDto {
                        name: name(),
                        monthly_price,
                        benefits: benefits(),
                    };
                    create_plan(&client, payload).await
                }
            };

            match result {
                Ok(_) => {
                    error.set(None);
                    show.set(false);
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::debug!("Plan form rejected: {}", err);
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
                TextField {
                    label: "Preço mensal",
                    value: price,
                    input_type: "number",
                    step: "0.01",
                    error: field_error(&current_error, "precoMensal")
                }
                TextField { label: "Benefícios", value: benefits, error: field_error(&current_error, "beneficios") }
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
