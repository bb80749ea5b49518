//! Category index for the navigation panel.

use serde::Serialize;

use crate::types::{Recipe, RecipeId};

/// One recipe entry in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Recipe id
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// `"{cuisine} • {difficulty}"`
    pub subtitle: String,
    /// Whether this is the recipe currently open
    pub active: bool,
}

/// Recipes sharing a category, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    /// Category label
    pub category: String,
    /// Entries in the category
    pub entries: Vec<IndexEntry>,
}

/// Groups recipes by category, keeping only those matching `filter`.
///
/// Categories appear in the order their first recipe appears. The filter is
/// a case-insensitive substring match against title, category, and cuisine;
/// an empty filter keeps everything.
pub fn build_index<'a, I>(recipes: I, filter: &str, current: Option<RecipeId>) -> Vec<CategoryGroup>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let needle = filter.to_lowercase();
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for recipe in recipes {
        if !matches_filter(recipe, &needle) {
            continue;
        }

        let entry = IndexEntry {
            id: recipe.id,
            title: recipe.title.clone(),
            subtitle: recipe.subtitle(),
            active: Some(recipe.id) == current,
        };

        match groups.iter_mut().find(|g| g.category == recipe.category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(CategoryGroup {
                category: recipe.category.clone(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// `needle` must already be lowercase.
fn matches_filter(recipe: &Recipe, needle: &str) -> bool {
    needle.is_empty()
        || recipe.title.to_lowercase().contains(needle)
        || recipe.category.to_lowercase().contains(needle)
        || recipe.cuisine.to_lowercase().contains(needle)
}
