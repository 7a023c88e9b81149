// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::config::AppConfig;
use api::prefs::ThemeController;
use api::snapshot::DirectorySnapshot;
use api::DirectoryState;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::empty_state::EmptyState;
use components::pico::Button;
use components::pico::Container;
use components::theme_toggle::ThemeToggle;
use hooks::use_directory_loader::use_directory_loader;
use screens::directory::DirectoryScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let theme_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        min-height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- PALETTE --- */
    .app-main-container[data-theme="light"] {
        --page-background: #e2e8f0;
        --surface-background: #ffffff;
        --surface-color: #000000;
    }
    .app-main-container[data-theme="dark"] {
        --page-background: #1f2937;
        --surface-background: #374151;
        --surface-color: #ffffff;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100vh;
        background-color: var(--page-background);
        color: var(--surface-color);
    }

    .app-main-container header {
        background-color: var(--surface-background);
        box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);
        padding: 0 2rem;
    }

    .app-main-container header h1 {
        margin: 0;
        font-size: 1.25rem;
        color: var(--surface-color);
    }

    .theme-icon { margin-right: 0.5rem; }

    /* --- SEARCH --- */
    .search-bar {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 1.25rem;
        padding-top: 2.5rem;
    }
    .search-input { position: relative; flex: 0 1 24rem; }
    .search-input .search-icon {
        position: absolute;
        left: 1rem;
        top: 50%;
        transform: translateY(-50%);
        opacity: 0.6;
    }
    .search-bar input, .search-bar select {
        background-color: var(--surface-background);
        color: var(--surface-color);
        margin: 0;
    }
    .search-bar input[type="search"] { padding-left: 3rem; }
    .search-bar select { flex: 0 0 14rem; }

    /* --- RESULTS --- */
    .country-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1.5rem;
        padding: 1rem 0;
    }
    .country-grid:empty { display: none; }
    .country-card {
        padding: 0;
        overflow: hidden;
        background-color: var(--surface-background);
        color: var(--surface-color);
    }
    .country-flag { width: 100%; display: block; aspect-ratio: 5 / 3; object-fit: cover; }
    .country-details { padding: 0.75rem 1rem; }
    .country-details h3 { color: var(--surface-color); margin-bottom: 0.5rem; }
    .country-details p { margin-bottom: 0.25rem; }
    .country-details span { font-weight: 600; }

    /* --- PLACEHOLDERS --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 2rem;
        text-align: center;
        min-height: 50vh;
    }
    .empty-state h2 { color: var(--surface-color); }
    .empty-state p { max-width: 400px; margin: 0 auto 1.5rem auto; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "{PICO_CSS}",
        }
        style {
            "{theme_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_context_provider(|| {
        let config = AppConfig::from_build_env();
        dioxus_logger::tracing::info!("config: {:#?}", config);
        AppState::new(config, ThemeController::new(compat::preference_store()))
    });

    // the theme is read once, before the first render.
    let snapshot = use_signal(|| DirectorySnapshot::new(app_state.theme_controller.read()));
    let state = use_context_provider(|| AppStateMut { snapshot });

    let loader = use_directory_loader(state, &app_state.config.source_url);

    rsx! {
        AppFrame {
            on_retry: move |_| loader.retry(),
        }
    }
}

/// Header plus whichever of the loading, error or ready views applies.
#[component]
fn AppFrame(on_retry: EventHandler<()>) -> Element {
    let state = use_context::<AppStateMut>();
    let current = state.snapshot.read();
    let theme = current.theme().as_str();

    let body = match current.directory() {
        DirectoryState::Loading => {
            return rsx! {
                section {
                    class: "app-main-container",
                    "data-theme": theme,
                    EmptyState {
                        title: "Loading.....",
                        busy: true,
                    }
                }
            };
        }
        DirectoryState::Error(reason) => rsx! {
            EmptyState {
                title: "Could not load countries",
                description: "{reason}",
                primary_action: rsx! {
                    Button {
                        on_click: move |_| on_retry.call(()),
                        "Retry"
                    }
                },
            }
        },
        DirectoryState::Ready(_) => rsx! {
            DirectoryScreen {}
        },
    };

    rsx! {
        div {
            class: "app-main-container",
            "data-theme": theme,
            header {
                nav {
                    ul {
                        li {
                            h1 {
                                "Where in the World?"
                            }
                        }
                    }
                    ul {
                        li {
                            ThemeToggle {}
                        }
                    }
                }
            }
            Container {
                {body}
            }
        }
    }
}
