use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a titled modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white dark:bg-neutral-800 rounded-lg shadow-lg max-w-md w-full mx-4 p-6",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "flex items-center justify-between mb-5",
                    h2 { class: "m-0 text-lg font-semibold text-neutral-800 dark:text-neutral-100", "{title}" }
                    button {
                        class: "border-none bg-transparent text-xl cursor-pointer text-neutral-500 hover:text-neutral-800",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
