mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod resources;
pub use resources::ResourcesView;
