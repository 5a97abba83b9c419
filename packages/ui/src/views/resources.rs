use dioxus::prelude::*;
use store::{Resource, ResourceFilter};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaFilter, FaPlus};
use crate::{make_repo, FilterBar, Icon, ResourceCard, ResourceForm, ResourceList};

use super::ModalOverlay;

/// Resource management page: card list, filter bar and the creation dialog.
#[component]
pub fn ResourcesView() -> Element {
    let mut list = use_signal(ResourceList::default);

    // Load the stored collection on mount
    let _loader = use_resource(move || async move {
        list.set(ResourceList::refresh_from(&make_repo()).await);
    });

    let handle_add = move |resource: Resource| {
        list.write().add(resource);
        let snapshot = list.read().resources.clone();
        spawn(async move {
            list.write().error = ResourceList::save_to(&make_repo(), &snapshot).await;
        });
    };

    let state = list();
    let visible = state.visible();
    let total = state.resources.len();

    rsx! {
        div {
            class: "flex flex-col gap-6 p-6",

            div {
                class: "flex justify-between items-center",
                h1 { class: "m-0 text-3xl font-bold", "Resource Management" }
                div {
                    class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| list.write().toggle_filter(),
                        Icon { icon: FaFilter, width: 14, height: 14 }
                        " Filter"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !state.loaded,
                        onclick: move |_| list.write().open_dialog(),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " Add Resource"
                    }
                }
            }

            if let Some(message) = &state.error {
                div { class: "px-4 py-3 rounded-md bg-red-100 text-red-800 text-sm", role: "alert", "{message}" }
            }

            if state.filter_open {
                FilterBar {
                    filter: state.filter,
                    on_change: move |filter: ResourceFilter| list.write().filter = filter,
                }
            }

            if !state.loaded {
                p { class: "m-0 text-sm text-neutral-500", "Loading resources..." }
            } else if total == 0 {
                p { class: "m-0 text-sm text-neutral-500", "No resources yet. Add one to get started." }
            } else if visible.is_empty() {
                p { class: "m-0 text-sm text-neutral-500", "No resources match the current filter." }
            } else {
                div {
                    class: "grid gap-4",
                    for resource in visible {
                        ResourceCard {
                            key: "{resource.id}",
                            resource: resource.clone(),
                        }
                    }
                }
            }
        }

        if state.dialog_open {
            ModalOverlay {
                title: "Add New Resource",
                on_close: move |_| list.write().close_dialog(),
                ResourceForm { on_submit: handle_add }
            }
        }
    }
}
