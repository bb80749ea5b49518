//! Error types for salem-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for salem-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in salem-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from salem-core
    #[error("Core error: {0}")]
    Core(#[from] salem_core::Error),

    /// Error from salem-client
    #[error("Client error: {0}")]
    Client(#[from] salem_client::Error),

    /// Configuration problem
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// File access failure
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Reading input or writing output failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
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
}
