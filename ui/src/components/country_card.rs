use api::CountryRecord;
use dioxus::prelude::*;

use crate::components::pico::Card;

/// Capitals as shown on a card, comma separated; empty when there is none.
pub fn capitals_label(country: &CountryRecord) -> String {
    country.capitals().join(", ")
}

/// Flag, name, population, region and capital of one country.
#[component]
pub fn CountryCard(country: CountryRecord) -> Element {
    let capitals = capitals_label(&country);
    let population = country.population();

    rsx! {
        Card {
            class: "country-card",
            img {
                class: "country-flag",
                src: "{country.flag_url()}",
                alt: "{country.flag_alt()}",
                "loading": "lazy",
            }
            div {
                class: "country-details",
                h3 { "{country.name()}" }
                p {
                    span { "Population: " }
                    "{population}"
                }
                p {
                    span { "Region: " }
                    "{country.region()}"
                }
                p {
                    span { "Capital: " }
                    "{capitals}"
                }
            }
        }
    }
}
