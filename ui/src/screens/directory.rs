//=============================================================================
// File: src/screens/directory.rs
//=============================================================================
use api::config::GridLayout;
use api::CountryRecord;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::country_grid::CountryGrid;
use crate::components::empty_state::EmptyState;
use crate::components::search_bar::SearchBar;

/// Records share their data, so this only copies handles.
fn owned(records: Vec<&CountryRecord>) -> Vec<CountryRecord> {
    records.into_iter().cloned().collect()
}

/// The ready layout: search controls followed by the result grids.
#[component]
pub fn DirectoryScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let snapshot = state.snapshot.read();

    let grids = match app_state.config.grid_layout {
        // region matches, text matches and the full list, all visible at once.
        GridLayout::Classic => {
            let by_region = owned(snapshot.region_results());
            let by_text = owned(snapshot.text_results());
            let all = snapshot.all_results().to_vec();
            rsx! {
                CountryGrid {
                    label: "Countries in the selected region",
                    countries: by_region,
                }
                CountryGrid {
                    label: "Countries matching the search",
                    countries: by_text,
                }
                CountryGrid {
                    label: "All countries",
                    countries: all,
                }
            }
        }
        GridLayout::Unified => {
            let results = owned(snapshot.combined_results());
            if results.is_empty() {
                rsx! {
                    EmptyState {
                        title: "No countries found",
                        description: "Try a different name, capital or region.",
                    }
                }
            } else {
                rsx! {
                    CountryGrid {
                        label: "Countries",
                        countries: results,
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "directory",
            SearchBar {}
            {grids}
        }
    }
}
