//! Error types for salem-client

use thiserror::Error;

/// Result type alias for salem-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching a cultural fact
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Malformed response body
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The client is not configured to make the call
    #[error("Configuration error: {message}")]
    Config {
        /// What is missing or wrong
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether a later attempt could succeed.
    ///
    /// Rate limits, server errors, and transport failures are transient;
    /// configuration and malformed replies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
        }
    }
}
