pub mod config;
pub mod draft;
pub mod error;
pub mod ids;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ReliefConfig;
pub use draft::{parse_quantity, ResourceDraft};
pub use error::{DraftError, ParseEnumError, StoreError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use models::{
    parse_conditions, Location, Resource, ResourceFilter, ResourceStatus, ResourceType,
};
pub use repo::{KeyValueStore, ResourceRepository};
