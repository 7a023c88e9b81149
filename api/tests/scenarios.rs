use std::rc::Rc;

use api::directory_source::DirectorySource;
use api::loader;
use api::prefs::store::MemoryStore;
use api::prefs::ThemeController;
use api::prefs::ThemePreference;
use api::snapshot::DirectorySnapshot;
use api::snapshot::Transition;
use api::CountryRecord;
use api::DirectoryError;
use api::DirectoryState;

/// Serves a canned JSON body the way the remote source would.
struct CannedSource(&'static str);

impl DirectorySource for CannedSource {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        Ok(serde_json::from_str(self.0)?)
    }

    fn describe(&self) -> &str {
        "canned"
    }
}

struct OfflineSource;

impl DirectorySource for OfflineSource {
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, DirectoryError> {
        Err(DirectoryError::Transport("network unreachable".to_string()))
    }

    fn describe(&self) -> &str {
        "offline"
    }
}

const COUNTRIES: &str = r#"[
    {
        "name": { "common": "Canada" },
        "capital": ["Ottawa"],
        "region": "Americas",
        "population": 38000000,
        "flags": { "png": "https://flagcdn.com/w320/ca.png" }
    },
    {
        "name": { "common": "France" },
        "capital": ["Paris"],
        "region": "Europe",
        "population": 67000000,
        "flags": { "png": "https://flagcdn.com/w320/fr.png" }
    },
    {
        "name": { "common": "Antarctica" },
        "region": "Antarctic",
        "population": 1000,
        "flags": { "png": "https://flagcdn.com/w320/aq.png" }
    }
]"#;

async fn loaded_snapshot() -> DirectorySnapshot {
    let state = loader::load(&CannedSource(COUNTRIES)).await;
    let transition = Transition::from_load(state).unwrap();
    DirectorySnapshot::new(ThemePreference::Light).apply(transition)
}

#[tokio::test]
async fn ottawa_finds_canada_and_europe_finds_france() {
    let snapshot = loaded_snapshot()
        .await
        .apply(Transition::TextQueryChanged("ottawa".to_string()))
        .apply(Transition::RegionQueryChanged("europe".to_string()));

    let by_text: Vec<_> = snapshot.text_results().into_iter().map(|r| r.name()).collect();
    let by_region: Vec<_> = snapshot.region_results().into_iter().map(|r| r.name()).collect();

    assert_eq!(by_text, ["Canada"]);
    assert_eq!(by_region, ["France"]);
}

#[tokio::test]
async fn country_without_capital_never_matches_on_capital() {
    let snapshot = loaded_snapshot().await;

    for query in ["o", "a", "paris", "ottawa", "t"] {
        let matched = snapshot
            .apply(Transition::TextQueryChanged(query.to_string()))
            .text_results()
            .into_iter()
            .any(|r| r.name() == "Antarctica");
        let name_match = "antarctica".contains(query);
        assert_eq!(matched, name_match, "query {query:?}");
    }
}

#[tokio::test]
async fn transport_failure_leaves_no_results() {
    let state = loader::load(&OfflineSource).await;
    assert!(state.is_error());

    let snapshot = DirectorySnapshot::default()
        .apply(Transition::from_load(state).unwrap())
        .apply(Transition::TextQueryChanged("a".to_string()))
        .apply(Transition::RegionQueryChanged("a".to_string()));

    assert!(snapshot.all_results().is_empty());
    assert!(snapshot.text_results().is_empty());
    assert!(snapshot.region_results().is_empty());
    assert!(matches!(snapshot.directory(), DirectoryState::Error(reason) if reason.contains("unreachable")));
}

#[test]
fn theme_persists_across_sessions() {
    let store = Rc::new(MemoryStore::new());

    let first_session = ThemeController::new(store.clone());
    let theme = first_session.read();
    assert_eq!(theme, ThemePreference::Light);
    first_session.write(ThemeController::toggle(theme));

    let second_session = ThemeController::new(store);
    assert_eq!(second_session.read(), ThemePreference::Dark);
}
