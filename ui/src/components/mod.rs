//! Shared building blocks of the directory screen.
pub mod country_card;
pub mod country_grid;
pub mod empty_state;
pub mod pico;
pub mod search_bar;
pub mod theme_toggle;
