use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "inline-flex items-center gap-1 px-4 py-2 rounded-md text-sm cursor-pointer bg-neutral-900 text-white border border-neutral-900 hover:bg-neutral-700 disabled:opacity-50 disabled:cursor-not-allowed",
            ButtonVariant::Outline => "inline-flex items-center gap-1 px-4 py-2 rounded-md text-sm cursor-pointer bg-transparent border border-neutral-300 hover:bg-neutral-100 disabled:opacity-50 disabled:cursor-not-allowed dark:border-neutral-600 dark:hover:bg-neutral-700",
            ButtonVariant::Ghost => "inline-flex items-center gap-1 px-4 py-2 rounded-md text-sm cursor-pointer bg-transparent border border-transparent hover:bg-neutral-100 disabled:opacity-50 disabled:cursor-not-allowed dark:hover:bg-neutral-700",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    /// `"button"` or `"submit"`.
    #[props(default = "button".to_string())]
    r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: variant.class(),
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
