//! The startup data load and its tri-state result.

use std::sync::Arc;

use dioxus_logger::tracing;

use crate::country::CountryRecord;
use crate::directory_source::DirectorySource;

/// The shared, never mutated collection held once loading succeeded.
pub type Collection = Arc<[CountryRecord]>;

/// Result of the startup fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum DirectoryState {
    #[default]
    Loading,
    Ready(Collection),
    Error(String),
}

impl DirectoryState {
    /// The loaded collection, if any.
    pub fn collection(&self) -> Option<&Collection> {
        match self {
            Self::Ready(c) => Some(c),
            _ => None,
        }
    }
}

/// Loads the full directory with a single request to `source`.
///
/// Never fails: transport and decoding errors are logged and turned into
/// `DirectoryState::Error` with a readable reason.
pub async fn load<S: DirectorySource>(source: &S) -> DirectoryState {
    tracing::info!("loading country directory from {}", source.describe());

    match source.fetch_all().await {
        Ok(records) => {
            tracing::info!("loaded {} countries", records.len());
            DirectoryState::Ready(records.into())
        }
        Err(e) => {
            tracing::error!("error fetching country directory: {e}");
            DirectoryState::Error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::DirectoryError;

    struct FakeSource {
        response: fn() -> Result<Vec<CountryRecord>, DirectoryError>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(response: fn() -> Result<Vec<CountryRecord>, DirectoryError>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    impl DirectorySource for FakeSource {
        async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
            self.calls.set(self.calls.get() + 1);
            (self.response)()
        }

        fn describe(&self) -> &str {
            "fake"
        }
    }

    fn two_countries() -> Result<Vec<CountryRecord>, DirectoryError> {
        Ok(vec![
            CountryRecord::new("France", Some("Paris"), "Europe", 67_000_000, "fr.png"),
            CountryRecord::new("Canada", Some("Ottawa"), "Americas", 38_000_000, "ca.png"),
        ])
    }

    #[tokio::test]
    async fn success_keeps_source_order() {
        let source = FakeSource::new(two_countries);
        let state = load(&source).await;

        let collection = state.collection().unwrap();
        let names: Vec<_> = collection.iter().map(CountryRecord::name).collect();
        assert_eq!(names, ["France", "Canada"]);
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn transport_failure_becomes_error_state() {
        let source = FakeSource::new(|| {
            Err(DirectoryError::Transport("connection refused".to_string()))
        });
        let state = load(&source).await;

        assert_eq!(
            state,
            DirectoryState::Error("network error: connection refused".to_string())
        );
        assert!(state.collection().is_none());
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn decode_failure_becomes_error_state() {
        let source = FakeSource::new(|| {
            let err = serde_json::from_str::<Vec<CountryRecord>>("{}").unwrap_err();
            Err(err.into())
        });
        let state = load(&source).await;

        match state {
            DirectoryState::Error(reason) => {
                assert!(reason.starts_with("unexpected response format"))
            }
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn default_state_is_loading() {
        assert!(DirectoryState::default().is_loading());
    }
}
