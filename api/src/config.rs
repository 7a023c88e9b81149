//! Build time configuration.
//!
//! The browser build has no process environment, so settings are baked in at
//! compile time through `option_env!`.

use std::str::FromStr;

use crate::directory_source::rest_countries::DEFAULT_URL;

/// How the ready screen lays out results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GridLayout {
    /// Region results, text results and the full list, stacked.
    #[default]
    Classic,
    /// One grid driven by a single combined text + region predicate.
    Unified,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub source_url: String,
    pub grid_layout: GridLayout,
}

impl AppConfig {
    /// Reads the configuration from the build environment.
    ///
    /// # Environment Variables (read at compile time):
    /// - `DIRECTORY_SOURCE_URL`: endpoint returning the country list.
    ///   defaults to the public REST Countries endpoint.
    /// - `GRID_LAYOUT`: "classic" or "unified", case-insensitive.
    ///   unknown values fall back to classic.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DIRECTORY_SOURCE_URL"), option_env!("GRID_LAYOUT"))
    }

    pub fn from_values(source_url: Option<&str>, grid_layout: Option<&str>) -> Self {
        let source_url = source_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_URL)
            .to_string();

        let grid_layout = grid_layout
            .and_then(|s| GridLayout::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self {
            source_url,
            grid_layout,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
