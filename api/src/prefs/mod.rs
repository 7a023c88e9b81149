//! User preferences: the theme value and where it is persisted.

pub mod store;
pub mod theme_controller;
pub mod theme_preference;

pub use store::PreferenceError;
pub use store::PreferenceStore;
pub use theme_controller::ThemeController;
pub use theme_preference::ThemePreference;
