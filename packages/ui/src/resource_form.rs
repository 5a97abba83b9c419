use dioxus::prelude::*;
use store::{parse_quantity, Resource, ResourceDraft, ResourceStatus, ResourceType};

use crate::components::{Button, ButtonVariant, Input, Label};

/// Form for creating a new resource.
///
/// The draft lives only as long as the form is mounted; the dialog unmounts it
/// on close so every open starts from the defaults.
#[component]
pub fn ResourceForm(on_submit: EventHandler<Resource>) -> Element {
    let mut draft = use_signal(ResourceDraft::new);
    let mut quantity_text = use_signal(|| "0".to_string());
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft().submit() {
            Ok(resource) => {
                error.set(None);
                on_submit.call(resource);
            }
            Err(e) => {
                tracing::debug!("Rejected resource draft: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let current = draft.read().clone();

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: handle_submit,

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-name", "Name" }
                Input {
                    id: "resource-name",
                    value: current.name,
                    required: true,
                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-type", "Type" }
                select {
                    id: "resource-type",
                    class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] focus:border-primary-500 dark:bg-neutral-800 dark:text-neutral-100 dark:border-neutral-600",
                    value: current.r#type.as_str(),
                    onchange: move |evt: FormEvent| {
                        if let Ok(t) = evt.value().parse::<ResourceType>() {
                            draft.write().r#type = t;
                        }
                    },
                    for t in ResourceType::ALL {
                        option {
                            key: "{t}",
                            value: t.as_str(),
                            selected: t == current.r#type,
                            {t.label()}
                        }
                    }
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-quantity", "Quantity" }
                Input {
                    id: "resource-quantity",
                    r#type: "number",
                    value: quantity_text(),
                    required: true,
                    oninput: move |evt: FormEvent| {
                        let text = evt.value();
                        draft.write().quantity = parse_quantity(&text);
                        quantity_text.set(text);
                    },
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-unit", "Unit" }
                Input {
                    id: "resource-unit",
                    placeholder: "kg, boxes, bottles",
                    value: current.unit,
                    required: true,
                    oninput: move |evt: FormEvent| draft.write().unit = evt.value(),
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-status", "Status" }
                select {
                    id: "resource-status",
                    class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] focus:border-primary-500 dark:bg-neutral-800 dark:text-neutral-100 dark:border-neutral-600",
                    value: current.status.as_str(),
                    onchange: move |evt: FormEvent| {
                        if let Ok(s) = evt.value().parse::<ResourceStatus>() {
                            draft.write().status = s;
                        }
                    },
                    for s in ResourceStatus::ALL {
                        option {
                            key: "{s}",
                            value: s.as_str(),
                            selected: s == current.status,
                            {s.label()}
                        }
                    }
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-expiry", "Expiry Date" }
                Input {
                    id: "resource-expiry",
                    r#type: "date",
                    value: current.expiry_date,
                    oninput: move |evt: FormEvent| draft.write().expiry_date = evt.value(),
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "resource-conditions", "Conditions" }
                Input {
                    id: "resource-conditions",
                    placeholder: "Enter conditions separated by commas",
                    value: current.conditions,
                    oninput: move |evt: FormEvent| draft.write().conditions = evt.value(),
                }
            }

            if let Some(message) = error() {
                p { class: "m-0 text-sm text-red-700", "{message}" }
            }

            div {
                class: "flex gap-2 mt-1",
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Add Resource"
                }
            }
        }
    }
}
