//! Recipe dataset records.
//!
//! Field names follow the camelCase layout of `data/recipes.json`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::RecipeId;

/// Dataset-level metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetMeta {
    /// Title of the recipe collection
    pub title: String,
}

/// A single recipe as authored in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Dense identifier, also the recipe's URL fragment
    pub id: RecipeId,

    /// Display title
    pub title: String,

    /// Category used to group the navigation index
    pub category: String,

    /// Cuisine of origin
    pub cuisine: String,

    /// Difficulty label ("Easy", "Medium", ...)
    pub difficulty: String,

    /// Serving count the ingredient amounts are authored for
    pub base_servings: u32,

    /// Preparation time label
    #[serde(default)]
    pub prep_time: String,

    /// Cooking time label
    #[serde(default)]
    pub cook_time: String,

    /// Ingredients with base amounts
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Per-serving nutrition figures
    #[serde(default)]
    pub nutrition: Nutrition,

    /// Ordered preparation steps
    #[serde(default)]
    pub instructions: Vec<Instruction>,

    /// Kitchen tips
    #[serde(default)]
    pub tips: Vec<String>,

    /// Dietary tags ("Vegetarian", "Gluten-Free", ...)
    #[serde(default)]
    pub dietary: Vec<String>,

    /// Optional image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Narrative text shown on the title card
    #[serde(default)]
    pub story: String,
}

impl Recipe {
    /// Returns the navigation subtitle, `"{cuisine} • {difficulty}"`.
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.cuisine, self.difficulty)
    }
}

/// An ingredient line with its amount for the base serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount for `base_servings` (non-negative)
    pub amount: f64,

    /// Unit label, may be empty for countable items
    #[serde(default)]
    pub unit: String,

    /// Ingredient name
    pub name: String,
}

/// A nutrition figure: either a bare number or a display string like `"12g"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    /// Numeric value
    Number(f64),
    /// Preformatted value
    Text(String),
}

impl Default for NutrientValue {
    fn default() -> Self {
        NutrientValue::Text(String::new())
    }
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientValue::Number(n) => write!(f, "{n}"),
            NutrientValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Per-serving nutrition record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    /// Calories
    pub calories: NutrientValue,
    /// Protein
    pub protein: NutrientValue,
    /// Carbohydrates
    pub carbs: NutrientValue,
    /// Fat
    pub fat: NutrientValue,
}

/// One numbered preparation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Step number as authored
    pub step: u32,
    /// Short heading
    #[serde(default)]
    pub title: String,
    /// Step body
    pub text: String,
}
