use serde::Deserialize;
use serde::Serialize;

/// The two-valued visual theme.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The key the theme is stored under.
    pub const STORAGE_KEY: &'static str = "theme";

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Text encoding used in the preference store, "light" or "dark".
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Decodes a stored value. Anything unrecognised yields `None`.
    ///
    /// Values written by a JSON based storage hook (`"\"dark\""`) are accepted
    /// as well as the bare text encoding.
    pub fn parse_stored(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().trim_matches('"');
        trimmed.parse().ok()
    }

    /// Human readable name for the toggle, e.g. "Dark Mode".
    pub fn mode_label(&self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }
}
