//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod repo;
pub use repo::make_repo;

pub mod views;

mod resource_list;
pub use resource_list::ResourceList;

mod resource_card;
pub use resource_card::{status_badge_class, CardView, ResourceCard};

mod resource_form;
pub use resource_form::ResourceForm;

mod filter_bar;
pub use filter_bar::FilterBar;
