//! Key-value persistence for user preferences.
//!
//! The browser build backs this with `localStorage` (see `ui::compat`); the
//! desktop build uses [`FileStore`]. [`MemoryStore`] is the fallback when
//! neither is available.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The backing storage does not exist or refused access.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("preference file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Synchronous string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-lifetime storage, used in tests and when nothing persistent exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use dioxus_logger::tracing;

    use super::PreferenceError;
    use super::PreferenceStore;

    /// Stores all preferences as one flat JSON object in a file.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Environment variable that overrides the preferences file path.
        pub const PATH_ENV: &'static str = "WITW_PREFS_FILE";

        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `$WITW_PREFS_FILE`, else `<config dir>/where-in-the-world/prefs.json`.
        pub fn default_location() -> Option<PathBuf> {
            if let Ok(path) = std::env::var(Self::PATH_ENV) {
                if !path.is_empty() {
                    return Some(PathBuf::from(path));
                }
            }
            dirs::config_dir().map(|dir| dir.join("where-in-the-world").join("prefs.json"))
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
            match fs::read_to_string(&self.path) {
                Ok(text) => Ok(serde_json::from_str(&text)?),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            // a corrupt file is replaced rather than blocking every later write.
            // any other read failure leaves the file alone.
            let mut values = match self.read_all() {
                Err(PreferenceError::Encode(e)) => {
                    tracing::warn!("replacing unreadable preference file: {e}");
                    BTreeMap::new()
                }
                other => other?,
            };
            values.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("prefs.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FileStore::new(&path).set("theme", "dark").unwrap();
        FileStore::new(&path).set("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn file_store_reports_corrupt_file_and_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("theme"), Err(PreferenceError::Encode(_))));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn file_store_keeps_file_it_cannot_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        // not valid UTF-8, so reading fails with an io error rather than a JSON one.
        let unreadable = [0xff, 0xfe, 0x00, 0x7b];
        std::fs::write(&path, unreadable).unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.set("theme", "dark"), Err(PreferenceError::Io(_))));
        assert_eq!(std::fs::read(&path).unwrap(), unreadable);
    }
}
