#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Salem Core Library
//!
//! Recipe model, dataset loading, quantity scaling, fragment routing, and the
//! explicit application state the front ends drive.

pub mod dataset;
pub mod error;
pub mod index;
mod proptests;
pub mod render;
pub mod route;
pub mod scale;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use dataset::RecipeBook;
pub use error::{Error, Result};
pub use route::{RouteOutcome, resolve};
pub use scale::scale;
pub use state::{AppState, CultureBanner, Intent, dispatch};
pub use types::{
    DatasetMeta, Ingredient, Instruction, NutrientValue, Nutrition, Page, Recipe, RecipeId,
    Section, ViewState,
};
