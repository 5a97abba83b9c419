//! # Repository — the persisted resource collection
//!
//! [`ResourceRepository`] owns the mapping between the in-memory `Vec<Resource>`
//! and a single string value in a [`KeyValueStore`]. The collection is always
//! read and written whole: there is no incremental sync, and the stored value is
//! the JSON array produced by `serde_json`.
//!
//! ## [`KeyValueStore`] trait
//!
//! An async interface with `get`/`set`/`remove` for string values by key.
//! Implementations live in sibling modules ([`crate::memory`],
//! `crate::file_store` on native targets, `crate::local_storage` in the browser),
//! so the same repository logic runs in tests, on desktop and on the web.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](ResourceRepository::load) | Reads and parses the collection. Absent key → empty list; unparsable value → [`StoreError::Malformed`]. |
//! | [`save`](ResourceRepository::save) | Serialises the full collection and overwrites the stored value. |
//! | [`add`](ResourceRepository::add) | `load`, append, `save`. Returns the new collection. |
//! | [`clear`](ResourceRepository::clear) | Removes the stored value. |

use crate::config::ReliefConfig;
use crate::error::{Result, StoreError};
use crate::models::Resource;

/// Async trait for storing string values by key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<()>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<()>>;
}

/// The resource collection backed by a KeyValueStore.
pub struct ResourceRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ResourceRepository<S> {
    /// Repository using the default `"resources"` key.
    pub fn new(store: S) -> Self {
        Self::with_config(store, &ReliefConfig::default())
    }

    pub fn with_config(store: S, config: &ReliefConfig) -> Self {
        Self {
            store,
            key: config.storage.key.clone(),
        }
    }

    /// The storage key the collection lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the full collection.
    pub async fn load(&self) -> Result<Vec<Resource>> {
        let Some(raw) = self.store.get(&self.key).await? else {
            tracing::debug!(key = %self.key, "no stored resources");
            return Ok(Vec::new());
        };

        let resources: Vec<Resource> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: self.key.clone(),
                source,
            })?;
        tracing::debug!(key = %self.key, count = resources.len(), "loaded resources");
        Ok(resources)
    }

    /// Overwrite the stored collection.
    pub async fn save(&self, resources: &[Resource]) -> Result<()> {
        let raw = serde_json::to_string(resources).map_err(StoreError::Encode)?;
        self.store.set(&self.key, raw).await?;
        tracing::debug!(key = %self.key, count = resources.len(), "saved resources");
        Ok(())
    }

    /// Append one resource to the stored collection.
    pub async fn add(&self, resource: Resource) -> Result<Vec<Resource>> {
        let mut resources = self.load().await?;
        resources.push(resource);
        self.save(&resources).await?;
        Ok(resources)
    }

    /// Drop the stored collection entirely.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(&self.key).await
    }
}
