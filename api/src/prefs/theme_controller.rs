use std::rc::Rc;

use dioxus_logger::tracing;

use super::store::PreferenceStore;
use super::theme_preference::ThemePreference;

/// Reads, writes and toggles the persisted theme.
///
/// Storage failures never reach the caller: reads fall back to the default
/// theme and failed writes are only logged.
#[derive(Clone)]
pub struct ThemeController {
    store: Rc<dyn PreferenceStore>,
}

impl ThemeController {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// The opposite of `current`.
    pub fn toggle(current: ThemePreference) -> ThemePreference {
        current.toggled()
    }

    /// The persisted theme, or the default on first use.
    pub fn read(&self) -> ThemePreference {
        match self.store.get(ThemePreference::STORAGE_KEY) {
            Ok(Some(raw)) => ThemePreference::parse_stored(&raw).unwrap_or_else(|| {
                tracing::warn!("ignoring unrecognised stored theme {raw:?}");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!("could not read theme preference: {e}");
                ThemePreference::default()
            }
        }
    }

    pub fn write(&self, value: ThemePreference) {
        if let Err(e) = self.store.set(ThemePreference::STORAGE_KEY, value.as_str()) {
            tracing::warn!("could not save theme preference: {e}");
        }
    }
}

impl PartialEq for ThemeController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::store::MemoryStore;
    use crate::prefs::store::PreferenceError;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Unavailable("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Unavailable("storage disabled".to_string()))
        }
    }

    #[test]
    fn empty_store_reads_light() {
        let controller = ThemeController::new(Rc::new(MemoryStore::new()));
        assert_eq!(controller.read(), ThemePreference::Light);
    }

    #[test]
    fn write_then_read() {
        let store = Rc::new(MemoryStore::new());
        let controller = ThemeController::new(store.clone());

        controller.write(ThemePreference::Dark);
        assert_eq!(controller.read(), ThemePreference::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_value_reads_default() {
        let store = Rc::new(MemoryStore::new());
        store.set("theme", "purple").unwrap();
        let controller = ThemeController::new(store);
        assert_eq!(controller.read(), ThemePreference::Light);
    }

    #[test]
    fn unavailable_store_fails_soft() {
        let controller = ThemeController::new(Rc::new(BrokenStore));
        assert_eq!(controller.read(), ThemePreference::Light);
        controller.write(ThemePreference::Dark);
        assert_eq!(controller.read(), ThemePreference::Light);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let t = ThemePreference::Dark;
        assert_eq!(ThemeController::toggle(ThemeController::toggle(t)), t);
    }
}
