use api::prefs::ThemeController;
use api::prefs::ThemePreference;
use api::snapshot::Transition;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;

fn icon(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "☀",
        ThemePreference::Dark => "☾",
    }
}

/// Switches between light and dark, persisting the choice first.
#[component]
pub fn ThemeToggle() -> Element {
    let app_state = use_context::<AppState>();
    let mut state = use_context::<AppStateMut>();
    let theme = state.snapshot.read().theme();

    rsx! {
        Button {
            button_type: ButtonType::Contrast,
            outline: true,
            aria_label: format!("Switch to {}", theme.toggled().mode_label()),
            on_click: move |_| {
                let next = ThemeController::toggle(state.snapshot.peek().theme());
                app_state.theme_controller.write(next);
                state.dispatch(Transition::ThemeToggled);
            },
            span {
                class: "theme-icon",
                "aria-hidden": "true",
                "{icon(theme)}"
            }
            "{theme.mode_label()}"
        }
    }
}
