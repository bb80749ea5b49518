//! Configuration for the `salem` binary.
//!
//! Resolution order for the file path: `--config` flag, then `SALEM_CONFIG`,
//! then `<config dir>/salem/config.toml`. A missing default file yields
//! defaults; a missing explicitly named file is an error.

use salem_client::CultureConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Project name used for the config directory.
pub const PROJECT_NAME: &str = "salem";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SALEM_CONFIG";

/// Environment variable overriding the dataset path.
pub const DATASET_ENV: &str = "SALEM_DATASET";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalemConfig {
    /// Recipe dataset file
    pub dataset: PathBuf,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Cultural-note request settings
    pub culture: CultureConfig,
}

impl Default for SalemConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/recipes.json"),
            log_level: "info".to_string(),
            culture: CultureConfig::default(),
        }
    }
}

impl SalemConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config file path from an explicit flag, the environment,
    /// or the platform default.
    pub fn resolve_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Some(path) = std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Loads configuration and applies environment overrides.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let config = match Self::resolve_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses TOML; absent keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies `SALEM_DATASET` and the culture environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var(DATASET_ENV).ok())
    }

    /// Applies an explicit dataset override; empty values are ignored.
    pub fn with_overrides(mut self, dataset: Option<String>) -> Self {
        if let Some(dataset) = dataset.filter(|d| !d.is_empty()) {
            self.dataset = PathBuf::from(dataset);
        }
        self.culture = self.culture.with_env_overrides();
        self
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// A copy safe to print.
    pub fn redacted(&self) -> Self {
        Self {
            culture: self.culture.redacted(),
            ..self.clone()
        }
    }
}
