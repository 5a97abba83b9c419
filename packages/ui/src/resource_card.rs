//! Summary card for a single resource.

use dioxus::prelude::*;
use store::{Resource, ResourceStatus};

use crate::icons::FaBox;
use crate::Icon;

/// Badge classes, one color per status.
pub fn status_badge_class(status: ResourceStatus) -> &'static str {
    match status {
        ResourceStatus::Available => "px-2 py-1 rounded-full text-sm bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-100",
        ResourceStatus::Allocated => "px-2 py-1 rounded-full text-sm bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-100",
        ResourceStatus::Depleted => "px-2 py-1 rounded-full text-sm bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-100",
    }
}

/// Display values for a card, with optional blocks already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub title: String,
    pub badge_class: &'static str,
    pub status_label: &'static str,
    pub type_label: &'static str,
    pub quantity: String,
    /// Empty when the conditions block is hidden.
    pub conditions: Vec<String>,
    pub expiry_date: Option<String>,
}

impl From<&Resource> for CardView {
    fn from(resource: &Resource) -> Self {
        CardView {
            title: resource.name.clone(),
            badge_class: status_badge_class(resource.status),
            status_label: resource.status.label(),
            type_label: resource.r#type.as_str(),
            quantity: resource.quantity_label(),
            conditions: resource.condition_tags().to_vec(),
            expiry_date: resource.expiry_date.clone(),
        }
    }
}

#[component]
pub fn ResourceCard(resource: Resource) -> Element {
    let view = CardView::from(&resource);
    let title = view.title;
    let status_label = view.status_label;
    let type_label = view.type_label;
    let quantity = view.quantity;

    rsx! {
        div {
            class: "p-5 border border-neutral-200 rounded-lg bg-white dark:bg-neutral-800 dark:border-neutral-700",
            div {
                class: "flex flex-row items-center justify-between mb-4",
                h3 {
                    class: "m-0 text-xl font-semibold flex items-center gap-2",
                    Icon { icon: FaBox, width: 18, height: 18 }
                    "{title}"
                }
                span { class: view.badge_class, "{status_label}" }
            }
            div {
                class: "grid grid-cols-2 gap-4",
                div {
                    p { class: "m-0 text-sm text-neutral-500", "Type" }
                    p { class: "m-0 font-medium", "{type_label}" }
                }
                div {
                    p { class: "m-0 text-sm text-neutral-500", "Quantity" }
                    p { class: "m-0 font-medium", "{quantity}" }
                }
                if !view.conditions.is_empty() {
                    div {
                        class: "col-span-2",
                        p { class: "m-0 text-sm text-neutral-500", "Conditions" }
                        div {
                            class: "flex gap-2 mt-1",
                            for (i, condition) in view.conditions.iter().enumerate() {
                                span {
                                    key: "{i}",
                                    class: "px-2 py-1 bg-neutral-100 rounded-full text-xs dark:bg-neutral-700",
                                    "{condition}"
                                }
                            }
                        }
                    }
                }
                if let Some(expiry) = &view.expiry_date {
                    div {
                        class: "col-span-2",
                        p { class: "m-0 text-sm text-neutral-500", "Expiry Date" }
                        p { class: "m-0 font-medium", "{expiry}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Location, ResourceType};

    fn resource(status: ResourceStatus) -> Resource {
        Resource {
            id: "1".to_string(),
            name: "Water Bottles".to_string(),
            r#type: ResourceType::Food,
            quantity: 500.0,
            unit: "bottles".to_string(),
            status,
            location: Location::default(),
            organization_id: String::new(),
            expiry_date: None,
            conditions: None,
            last_updated: "2024-05-01T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_status_badges_differ() {
        let available = status_badge_class(ResourceStatus::Available);
        let allocated = status_badge_class(ResourceStatus::Allocated);
        let depleted = status_badge_class(ResourceStatus::Depleted);
        assert_ne!(available, depleted);
        assert_ne!(available, allocated);
        assert_ne!(allocated, depleted);
        assert!(available.contains("bg-green-100"));
        assert!(allocated.contains("bg-yellow-100"));
        assert!(depleted.contains("bg-red-100"));
    }

    #[test]
    fn test_card_without_optional_blocks() {
        let view = CardView::from(&resource(ResourceStatus::Available));
        assert_eq!(view.title, "Water Bottles");
        assert_eq!(view.status_label, "Available");
        assert_eq!(view.type_label, "food");
        assert_eq!(view.quantity, "500 bottles");
        assert!(view.conditions.is_empty());
        assert!(view.expiry_date.is_none());
    }

    #[test]
    fn test_card_with_optional_blocks() {
        let mut r = resource(ResourceStatus::Depleted);
        r.conditions = Some(vec!["clean".to_string(), "sealed".to_string()]);
        r.expiry_date = Some("2025-06-30".to_string());

        let view = CardView::from(&r);
        assert_eq!(view.status_label, "Depleted");
        assert!(view.badge_class.contains("bg-red-100"));
        assert_eq!(view.conditions, vec!["clean", "sealed"]);
        assert_eq!(view.expiry_date.as_deref(), Some("2025-06-30"));
    }
}
