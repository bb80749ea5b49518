//! Handler functions for config CLI commands.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{PROJECT_NAME, SalemConfig};
use crate::error::{Error, Result};

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => {
            let config = SalemConfig::load(config_path)?;
            print!("{}", cmd_config_show(&config)?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = match file.or_else(|| config_path.map(str::to_string)) {
                Some(p) => PathBuf::from(p),
                None => SalemConfig::resolve_path(None)
                    .ok_or_else(|| Error::config("Could not determine config directory"))?,
            };
            cmd_config_init(&path, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match SalemConfig::resolve_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Render the effective configuration with secrets masked.
pub fn cmd_config_show(config: &SalemConfig) -> Result<String> {
    config.redacted().to_toml_string()
}

/// Create a default configuration file at `path`.
pub fn cmd_config_init(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = SalemConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        cmd_config_init(&path, false).unwrap();
        let written = SalemConfig::from_file(&path).unwrap();
        assert_eq!(written, SalemConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let err = cmd_config_init(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("warn"));

        cmd_config_init(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("info"));
    }

    #[test]
    fn test_show_masks_api_key() {
        let mut config = SalemConfig::default();
        config.culture.api_key = Some("sk-live-secret".into());

        let shown = cmd_config_show(&config).unwrap();
        assert!(!shown.contains("sk-live-secret"));
        assert!(shown.contains("********"));
    }
}
