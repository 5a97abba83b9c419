use dioxus::prelude::*;
use store::{ResourceFilter, ResourceStatus, ResourceType};

use crate::components::{Button, ButtonVariant, Label};

/// Type and status selectors narrowing the rendered resource list.
#[component]
pub fn FilterBar(filter: ResourceFilter, on_change: EventHandler<ResourceFilter>) -> Element {
    let selected_type = filter.r#type.map(|t| t.as_str()).unwrap_or_default();
    let selected_status = filter.status.map(|s| s.as_str()).unwrap_or_default();

    rsx! {
        div {
            class: "flex items-end gap-4 p-4 border border-neutral-200 rounded-lg dark:border-neutral-700",

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "filter-type", "Type" }
                select {
                    id: "filter-type",
                    class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] focus:border-primary-500 dark:bg-neutral-800 dark:text-neutral-100 dark:border-neutral-600",
                    value: selected_type,
                    onchange: move |evt: FormEvent| {
                        on_change.call(ResourceFilter {
                            r#type: evt.value().parse().ok(),
                            ..filter
                        });
                    },
                    option { value: "", selected: filter.r#type.is_none(), "All types" }
                    for t in ResourceType::ALL {
                        option {
                            key: "{t}",
                            value: t.as_str(),
                            selected: filter.r#type == Some(t),
                            {t.label()}
                        }
                    }
                }
            }

            div {
                class: "flex flex-col gap-1.5",
                Label { html_for: "filter-status", "Status" }
                select {
                    id: "filter-status",
                    class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] focus:border-primary-500 dark:bg-neutral-800 dark:text-neutral-100 dark:border-neutral-600",
                    value: selected_status,
                    onchange: move |evt: FormEvent| {
                        on_change.call(ResourceFilter {
                            status: evt.value().parse().ok(),
                            ..filter
                        });
                    },
                    option { value: "", selected: filter.status.is_none(), "All statuses" }
                    for s in ResourceStatus::ALL {
                        option {
                            key: "{s}",
                            value: s.as_str(),
                            selected: filter.status == Some(s),
                            {s.label()}
                        }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                disabled: !filter.is_active(),
                onclick: move |_| on_change.call(ResourceFilter::default()),
                "Clear"
            }
        }
    }
}
