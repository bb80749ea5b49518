//! The cultural-fact source abstraction.

use async_trait::async_trait;
use salem_core::Recipe;

use crate::error::Result;

/// Something that can produce a short cultural note about a recipe.
///
/// `Ok(None)` means the source answered but had no text to offer.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetches a note about `recipe`.
    async fn fetch_fact(&self, recipe: &Recipe) -> Result<Option<String>>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Builds the prompt sent for `recipe`.
pub fn fact_prompt(recipe: &Recipe) -> String {
    format!(
        "Share a brief cultural fact about the dish \"{}\" from {} cuisine. Keep it to 2-3 sentences.",
        recipe.title, recipe.cuisine
    )
}
