use api::region::Region;
use api::snapshot::Transition;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state_mut::AppStateMut;

/// The free-text search box and the region selector.
///
/// Both fire on every change; each change is a separate transition so the two
/// queries stay independent.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppStateMut>();
    let (text_query, region_query) = {
        let snapshot = state.snapshot.read();
        (
            snapshot.text_query().to_string(),
            snapshot.region_query().to_string(),
        )
    };

    rsx! {
        div {
            class: "search-bar",
            div {
                class: "search-input",
                span {
                    class: "search-icon",
                    "aria-hidden": "true",
                    "🔍"
                }
                input {
                    r#type: "search",
                    placeholder: "Search for a country...",
                    "aria-label": "Search by country or capital",
                    value: "{text_query}",
                    oninput: move |evt| state.dispatch(Transition::TextQueryChanged(evt.value())),
                }
            }
            select {
                "aria-label": "Filter Countries By Region",
                onchange: move |evt| state.dispatch(Transition::RegionQueryChanged(evt.value())),
                {
                    Region::iter().map(|region| {
                        let value = region.value();
                        rsx! {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: region_query == value,
                                "{region.label()}"
                            }
                        }
                    })
                }
            }
        }
    }
}
