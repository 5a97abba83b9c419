use dioxus::prelude::*;

/// Text-like input bound to a string value.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] required: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] focus:border-primary-500 dark:bg-neutral-800 dark:text-neutral-100 dark:border-neutral-600",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            required: required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
