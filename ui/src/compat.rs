// Re-export the platform preference store from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::rc::Rc;

    use api::prefs::PreferenceError;
    use api::prefs::PreferenceStore;

    /// The browser's `localStorage`, scoped to the page origin.
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, PreferenceError> {
            let window = web_sys::window()
                .ok_or_else(|| PreferenceError::Unavailable("no window".to_string()))?;
            window
                .local_storage()
                .map_err(|e| PreferenceError::Unavailable(format!("{e:?}")))?
                .ok_or_else(|| PreferenceError::Unavailable("localStorage is disabled".to_string()))
        }
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Self::storage()?
                .get_item(key)
                .map_err(|e| PreferenceError::Unavailable(format!("{e:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| PreferenceError::Unavailable(format!("{e:?}")))
        }
    }

    pub fn preference_store() -> Rc<dyn PreferenceStore> {
        Rc::new(LocalStorage)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::rc::Rc;

    use api::prefs::store::FileStore;
    use api::prefs::store::MemoryStore;
    use api::prefs::PreferenceStore;

    /// A JSON file in the user's config directory; in-memory if there is none.
    pub fn preference_store() -> Rc<dyn PreferenceStore> {
        match FileStore::default_location() {
            Some(path) => {
                dioxus_logger::tracing::debug!("theme preference file: {}", path.display());
                Rc::new(FileStore::new(path))
            }
            None => {
                dioxus_logger::tracing::warn!(
                    "no config directory; theme preference will not persist"
                );
                Rc::new(MemoryStore::new())
            }
        }
    }
}
