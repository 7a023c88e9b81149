//! The immutable state of the whole screen.
//!
//! The view never edits fields in place. Every user or loader event is a
//! [`Transition`], and [`DirectorySnapshot::apply`] returns the next snapshot.

use dioxus_logger::tracing;

use crate::country::CountryRecord;
use crate::filter;
use crate::loader::Collection;
use crate::loader::DirectoryState;
use crate::prefs::ThemePreference;

/// A discrete change to the screen state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    LoadSucceeded(Collection),
    LoadFailed(String),
    /// Only honoured from the error state; starts a new load.
    RetryRequested,
    TextQueryChanged(String),
    RegionQueryChanged(String),
    ThemeToggled,
}

impl Transition {
    /// Maps a finished load onto its transition. `Loading` maps to nothing.
    pub fn from_load(state: DirectoryState) -> Option<Self> {
        match state {
            DirectoryState::Loading => None,
            DirectoryState::Ready(collection) => Some(Self::LoadSucceeded(collection)),
            DirectoryState::Error(reason) => Some(Self::LoadFailed(reason)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DirectorySnapshot {
    directory: DirectoryState,
    text_query: String,
    region_query: String,
    theme: ThemePreference,
}

impl DirectorySnapshot {
    /// A loading snapshot with the theme read at startup.
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn apply(&self, transition: Transition) -> Self {
        let mut next = self.clone();
        match transition {
            Transition::LoadSucceeded(collection) if self.directory.is_loading() => {
                next.directory = DirectoryState::Ready(collection);
            }
            Transition::LoadFailed(reason) if self.directory.is_loading() => {
                next.directory = DirectoryState::Error(reason);
            }
            Transition::RetryRequested if self.directory.is_error() => {
                next.directory = DirectoryState::Loading;
            }
            Transition::TextQueryChanged(query) => next.text_query = query,
            Transition::RegionQueryChanged(query) => next.region_query = query,
            Transition::ThemeToggled => next.theme = self.theme.toggled(),
            ignored => {
                tracing::debug!("ignoring {ignored:?} while {:?}", self.directory);
            }
        }
        next
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn text_query(&self) -> &str {
        &self.text_query
    }

    pub fn region_query(&self) -> &str {
        &self.region_query
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    fn records(&self) -> &[CountryRecord] {
        self.directory.collection().map(|c| &**c).unwrap_or(&[])
    }

    /// The full collection, empty unless loaded.
    pub fn all_results(&self) -> &[CountryRecord] {
        self.records()
    }

    pub fn region_results(&self) -> Vec<&CountryRecord> {
        filter::filter_by_region(self.records(), &self.region_query)
    }

    pub fn text_results(&self) -> Vec<&CountryRecord> {
        filter::filter_by_text(self.records(), &self.text_query)
    }

    /// Results of the single combined predicate used by the unified layout.
    pub fn combined_results(&self) -> Vec<&CountryRecord> {
        filter::filter_combined(self.records(), &self.text_query, &self.region_query)
    }
}
