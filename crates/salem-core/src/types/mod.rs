//! Core types for the recipe book.

mod ids;
mod recipe;
mod view;

pub use ids::RecipeId;
pub use recipe::{DatasetMeta, Ingredient, Instruction, NutrientValue, Nutrition, Recipe};
pub use view::{Page, Section, ViewState};
