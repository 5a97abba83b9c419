use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "text-sm font-medium text-neutral-700 dark:text-neutral-300",
            r#for: html_for,
            {children}
        }
    }
}
