//! Recipe identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a recipe in the dataset.
///
/// Recipes are numbered densely from zero, and the identifier doubles as the
/// URL fragment of the recipe's detail view (`#3`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecipeId(u32);

impl RecipeId {
    /// Creates a recipe ID from its numeric value.
    ///
    /// # Examples
    ///
    /// ```
    /// use salem_core::RecipeId;
    ///
    /// let id = RecipeId::new(3);
    /// assert_eq!(id.get(), 3);
    /// assert_eq!(id.to_string(), "3");
    /// ```
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<RecipeId> for u32 {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecipeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
