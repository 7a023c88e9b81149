use api::config::AppConfig;
use api::prefs::ThemeController;
use std::ops::Deref;
use std::rc::Rc;

pub struct AppStateData {
    pub config: AppConfig,
    pub theme_controller: ThemeController,
}

/// Stable, non-reactive state shared through context.
#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(config: AppConfig, theme_controller: ThemeController) -> Self {
        Self(Rc::new(AppStateData {
            config,
            theme_controller,
        }))
    }
}
