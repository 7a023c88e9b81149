//! Defines the trait and implementation for the remote country directory.

use crate::country::CountryRecord;
use crate::error::DirectoryError;

/// A trait for any service that can provide the full list of countries.
pub trait DirectorySource {
    /// Fetches the complete collection, in the order the source provides it.
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError>;

    /// Where the data comes from, for log messages.
    fn describe(&self) -> &str;
}

/// Provides country data from the public REST Countries API.
pub mod rest_countries {
    use super::*;

    /// The public endpoint; it takes no parameters and returns every country.
    pub const DEFAULT_URL: &str = "https://restcountries.com/v3.1/all";

    /// An implementation of the `DirectorySource` trait for REST Countries.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RestCountries {
        url: String,
    }

    impl RestCountries {
        pub fn new(url: impl Into<String>) -> Self {
            Self { url: url.into() }
        }
    }

    impl Default for RestCountries {
        fn default() -> Self {
            Self::new(DEFAULT_URL)
        }
    }

    impl DirectorySource for RestCountries {
        async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
            let client = reqwest::Client::new();
            let body = client
                .get(&self.url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;

            // decoded separately so a bad payload is reported as `Decode`,
            // not as a transport failure.
            Ok(serde_json::from_str(&body)?)
        }

        fn describe(&self) -> &str {
            &self.url
        }
    }
}
