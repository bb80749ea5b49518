//! Client configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default Messages API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";

/// Default model.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default API version header value.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Settings for the cultural-fact request.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CultureConfig {
    /// Messages API URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Response token cap
    pub max_tokens: u32,

    /// Value of the `anthropic-version` header
    pub anthropic_version: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// API key; usually supplied through `ANTHROPIC_API_KEY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for CultureConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 300,
            anthropic_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: 30,
            api_key: None,
        }
    }
}

impl CultureConfig {
    /// Applies `ANTHROPIC_API_KEY` and `ANTHROPIC_MODEL` when they are set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("ANTHROPIC_API_KEY").ok(),
            std::env::var("ANTHROPIC_MODEL").ok(),
        )
    }

    /// Applies explicit overrides; empty values are ignored.
    pub fn with_overrides(mut self, api_key: Option<String>, model: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = model.filter(|m| !m.is_empty()) {
            self.model = model;
        }
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// A copy safe to print, with the API key masked.
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

impl fmt::Debug for CultureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CultureConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("anthropic_version", &self.anthropic_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "********"))
            .finish()
    }
}
