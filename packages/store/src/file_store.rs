//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in its
//! own file. It is used on desktop to retain the resource list across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── relief.toml         # optional, see crate::config
//! └── <key>.json          # stored value for <key>
//! ```
//!
//! ## Platform data directories
//!
//! The UI crate joins `dirs::data_dir()` with `relief` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/relief/` |
//! | Linux | `~/.local/share/relief/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\relief\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;
use crate::repo::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.value_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.value_path(key), value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
