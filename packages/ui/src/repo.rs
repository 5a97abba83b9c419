//! Shared repository constructor for all platforms.
//!
//! Returns a [`store::ResourceRepository`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via `store::LocalStorageStore`
//! - **Desktop** (native): `<data_dir>/relief/` via `store::FileStore`, with the
//!   storage key taken from `relief.toml` in the same directory when present
//! - anything else: a throwaway [`store::MemoryStore`]

/// Create a platform-appropriate resource repository.
pub fn make_repo() -> store::ResourceRepository<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::ResourceRepository::new(store::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("relief");
        let config = store::ReliefConfig::load_from_dir(&base);
        store::ResourceRepository::with_config(store::FileStore::new(base), &config)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::ResourceRepository::new(store::MemoryStore::new())
    }
}
