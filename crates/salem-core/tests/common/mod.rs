//! Common test utilities for salem-core integration tests.

use salem_core::{AppState, Intent, RecipeBook, dispatch};
use std::path::PathBuf;

/// Path of the dataset shipped with the workspace.
pub fn bundled_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/recipes.json")
}

/// Loads the dataset shipped with the workspace.
pub fn bundled_book() -> RecipeBook {
    RecipeBook::load(bundled_dataset_path()).expect("bundled dataset should load")
}

/// Test harness holding a book and the state produced so far.
pub struct Session {
    /// Dataset under test
    pub book: RecipeBook,
    /// Current application state
    pub state: AppState,
}

impl Session {
    /// Starts a session on the bundled dataset.
    pub fn new() -> Self {
        let book = bundled_book();
        let state = AppState::initial(&book);
        Self { book, state }
    }

    /// Dispatches a sequence of intents, returning the final state.
    pub fn run(&mut self, intents: impl IntoIterator<Item = Intent>) -> &AppState {
        for intent in intents {
            self.state = dispatch(&self.state, &self.book, intent);
        }
        &self.state
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
