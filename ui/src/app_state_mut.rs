//! Defines the reactive state for the application's UI.

use api::snapshot::DirectorySnapshot;
use api::snapshot::Transition;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context.
///
/// The whole screen is one immutable [`DirectorySnapshot`]. Components never
/// write to it directly; they `dispatch` a [`Transition`] and the signal is
/// replaced with the resulting snapshot, which re-renders every reader.
#[derive(Clone, Copy, PartialEq)]
pub struct AppStateMut {
    pub snapshot: Signal<DirectorySnapshot>,
}

impl AppStateMut {
    pub fn dispatch(&mut self, transition: Transition) {
        let next = self.snapshot.peek().apply(transition);
        self.snapshot.set(next);
    }
}
