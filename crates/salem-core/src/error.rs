//! Error types for the Salem core library.

use std::path::{Path, PathBuf};

use crate::types::RecipeId;

/// Errors that can occur while loading recipes or scaling quantities.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without
/// breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Serving counts must both be at least one.
    #[error("Invalid servings: base {base}, target {target} (both must be at least 1)")]
    InvalidServings {
        /// Serving count the amount was authored for
        base: u32,
        /// Serving count requested
        target: u32,
    },

    /// Ingredient amounts must be finite and non-negative.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// The dataset parsed but violates a model invariant.
    #[error("Dataset error: {message}")]
    Dataset {
        /// What went wrong
        message: String,
    },

    /// No recipe with the given identifier exists.
    #[error("Recipe not found: {id}")]
    RecipeNotFound {
        /// Identifier that was looked up
        id: RecipeId,
    },

    /// I/O error while reading a file.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Text rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Convenience `Result` type alias for Salem core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new dataset validation error.
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Error::Dataset {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` if the error came from bad caller input rather than
    /// from the dataset or the environment.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::InvalidServings { .. } | Error::InvalidAmount { .. }
        )
    }
}
