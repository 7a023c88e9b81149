//! Defines the country record as delivered by the directory source.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

/// The `name` object of a source record. Only the common name is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct CountryName {
    common: String,
}

/// The `flags` object of a source record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Flags {
    png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
}

/// One country, immutable once fetched.
///
/// The serde layout mirrors the nested JSON shape of the source so a
/// response body decodes straight into `Vec<CountryRecord>`. The fields are
/// shared, so cloning a record for a grid only bumps a reference count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryRecord(Arc<RecordData>);

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct RecordData {
    name: CountryName,
    /// Some territories have no capital at all; the source then omits the field.
    #[serde(default)]
    capital: Vec<String>,
    region: String,
    #[serde(default)]
    population: u64,
    flags: Flags,
}

impl CountryRecord {
    pub fn new(
        name: impl Into<String>,
        capital: Option<&str>,
        region: impl Into<String>,
        population: u64,
        flag_url: impl Into<String>,
    ) -> Self {
        Self(Arc::new(RecordData {
            name: CountryName {
                common: name.into(),
            },
            capital: capital.map(|c| vec![c.to_string()]).unwrap_or_default(),
            region: region.into(),
            population,
            flags: Flags {
                png: flag_url.into(),
                alt: None,
            },
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name.common
    }

    /// The first listed capital, which is the one used for matching.
    pub fn capital(&self) -> Option<&str> {
        self.0.capital.first().map(String::as_str)
    }

    /// All listed capitals, in source order.
    pub fn capitals(&self) -> &[String] {
        &self.0.capital
    }

    pub fn region(&self) -> &str {
        &self.0.region
    }

    pub fn population(&self) -> u64 {
        self.0.population
    }

    pub fn flag_url(&self) -> &str {
        &self.0.flags.png
    }

    /// Alt text for the flag image, falling back to "Flag of <name>".
    pub fn flag_alt(&self) -> String {
        match &self.0.flags.alt {
            Some(alt) if !alt.is_empty() => alt.clone(),
            _ => format!("Flag of {}", self.name()),
        }
    }
}
