//! The fixed set of options offered by the region selector.

/// A region selector option.
///
/// The option value (what gets matched against a record's region) is the
/// variant name; `All` is a selectable value too and, like in the classic
/// layout, is matched literally.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    /// The option value, e.g. "Americas".
    pub fn value(&self) -> &'static str {
        self.into()
    }

    /// The text shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Filter By Region",
            Self::Americas => "America",
            other => other.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn options_are_in_selector_order() {
        let values: Vec<_> = Region::iter().map(|r| r.value()).collect();
        assert_eq!(
            values,
            ["All", "Africa", "Americas", "Asia", "Europe", "Oceania"]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Region::All.label(), "Filter By Region");
        assert_eq!(Region::Americas.label(), "America");
        assert_eq!(Region::Oceania.label(), "Oceania");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Region::from_str("europe").unwrap(), Region::Europe);
        assert_eq!(Region::from_str("ALL").unwrap(), Region::All);
        assert!(Region::from_str("Atlantis").is_err());
    }
}
