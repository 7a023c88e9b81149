use api::CountryRecord;
use dioxus::prelude::*;

use crate::components::country_card::CountryCard;

/// A responsive grid of country cards, in the order given.
#[component]
pub fn CountryGrid(label: String, countries: Vec<CountryRecord>) -> Element {
    rsx! {
        section {
            class: "country-grid",
            "aria-label": "{label}",
            for country in countries {
                CountryCard {
                    key: "{country.name()}",
                    country: country.clone(),
                }
            }
        }
    }
}
