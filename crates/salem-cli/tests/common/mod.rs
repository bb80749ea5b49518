//! Common test utilities for salem-cli integration tests.

use salem_cli::browse::run_session;
use salem_client::{CultureService, MockFactSource};
use salem_core::RecipeBook;
use std::path::PathBuf;
use std::sync::Arc;

/// Loads the dataset shipped with the workspace.
pub fn bundled_book() -> RecipeBook {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/recipes.json");
    RecipeBook::load(path).expect("bundled dataset should load")
}

/// Runs a browse session over `script` and returns everything it printed.
pub async fn browse(script: &str, source: Arc<MockFactSource>) -> String {
    let book = bundled_book();
    let service = CultureService::new(source);
    let input = tokio::io::BufReader::new(script.as_bytes());
    let mut output = Vec::new();

    run_session(&book, &service, input, &mut output)
        .await
        .expect("session should run");
    String::from_utf8(output).expect("output should be UTF-8")
}
