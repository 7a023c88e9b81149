use std::cell::Cell;
use std::rc::Rc;

use api::directory_source::rest_countries::RestCountries;
use api::snapshot::Transition;
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Owns the in-flight directory fetch.
///
/// The fetch runs as a spawned task whose handle is kept here, so it can be
/// cancelled when the owning component goes away or when a retry replaces it.
#[derive(Clone)]
pub struct DirectoryLoader {
    task: Rc<Cell<Option<Task>>>,
    state: AppStateMut,
    source: RestCountries,
}

impl DirectoryLoader {
    /// Starts a fetch, cancelling any previous one.
    fn start(&self) {
        self.cancel();

        let mut state = self.state;
        let source = self.source.clone();
        let task = spawn(async move {
            let loaded = api::loader::load(&source).await;
            if let Some(transition) = Transition::from_load(loaded) {
                state.dispatch(transition);
            }
        });
        self.task.set(Some(task));
    }

    /// Goes back to loading and fetches again. Only valid from the error state.
    pub fn retry(&self) {
        if !self.state.snapshot.peek().directory().is_error() {
            return;
        }
        dioxus_logger::tracing::info!("retrying directory load");
        let mut state = self.state;
        state.dispatch(Transition::RetryRequested);
        self.start();
    }

    pub fn cancel(&self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

/// Kicks off the one startup fetch and cancels it if the caller unmounts first.
pub fn use_directory_loader(state: AppStateMut, source_url: &str) -> DirectoryLoader {
    let loader = use_hook(|| {
        let loader = DirectoryLoader {
            task: Rc::new(Cell::new(None)),
            state,
            source: RestCountries::new(source_url),
        };
        loader.start();
        loader
    });

    use_drop({
        let loader = loader.clone();
        move || loader.cancel()
    });

    loader
}
