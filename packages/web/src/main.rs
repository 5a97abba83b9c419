use dioxus::prelude::*;

use ui::views::ResourcesView;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/admin/resources")]
    Resources {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to `/admin/resources`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Resources {});
    rsx! {}
}

#[component]
fn Resources() -> Element {
    rsx! { ResourcesView {} }
}
