//! Recipe dataset loading and lookup.
//!
//! The dataset is a single JSON document:
//!
//! ```json
//! { "meta": { "title": "Salem Recipe Book" }, "recipes": [ ... ] }
//! ```
//!
//! Loading validates the invariants the scaler and router rely on, so the
//! rest of the crate can assume them.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{DatasetMeta, Recipe, RecipeId};

#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default)]
    meta: DatasetMeta,
    recipes: Vec<Recipe>,
}

/// A validated, read-only collection of recipes.
#[derive(Debug, Clone)]
pub struct RecipeBook {
    meta: DatasetMeta,
    recipes: Vec<Recipe>,
    positions: HashMap<RecipeId, usize>,
}

impl RecipeBook {
    /// Builds a book from metadata and recipes, validating them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dataset`] on duplicate ids, a zero base serving
    /// count, or an ingredient amount that is negative or not finite.
    pub fn new(meta: DatasetMeta, recipes: Vec<Recipe>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            validate_recipe(recipe)?;
            if positions.insert(recipe.id, position).is_some() {
                return Err(Error::dataset(format!("duplicate recipe id {}", recipe.id)));
            }
        }

        Ok(Self {
            meta,
            recipes,
            positions,
        })
    }

    /// Parses and validates a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::new(dataset.meta, dataset.recipes)
    }

    /// Reads, parses, and validates a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let book = Self::from_json_str(&content)?;

        tracing::info!(
            count = book.len(),
            title = %book.meta.title,
            path = %path.display(),
            "Loaded {} recipes from {}",
            book.len(),
            book.meta.title
        );

        Ok(book)
    }

    /// Dataset metadata.
    pub fn meta(&self) -> &DatasetMeta {
        &self.meta
    }

    /// Title of the collection.
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// All recipes in dataset order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.positions.get(&id).map(|&position| &self.recipes[position])
    }

    /// Looks up a recipe by id, failing with [`Error::RecipeNotFound`].
    pub fn require(&self, id: RecipeId) -> Result<&Recipe> {
        self.get(id).ok_or(Error::RecipeNotFound { id })
    }

    /// The set of known ids, as the router expects it.
    pub fn recipe_ids(&self) -> HashSet<RecipeId> {
        self.positions.keys().copied().collect()
    }

    /// The first recipe in dataset order.
    pub fn first(&self) -> Option<&Recipe> {
        self.recipes.first()
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if the book holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate_recipe(recipe: &Recipe) -> Result<()> {
    if recipe.base_servings == 0 {
        return Err(Error::dataset(format!(
            "recipe {} ({}) has zero base servings",
            recipe.id, recipe.title
        )));
    }

    if let Some(bad) = recipe
        .ingredients
        .iter()
        .find(|ing| !ing.amount.is_finite() || ing.amount < 0.0)
    {
        return Err(Error::dataset(format!(
            "recipe {} ({}) has invalid amount {} for {}",
            recipe.id, recipe.title, bad.amount, bad.name
        )));
    }

    Ok(())
}
