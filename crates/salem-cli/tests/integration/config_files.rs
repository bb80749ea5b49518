use salem_cli::config::SalemConfig;
use salem_cli::config_handlers::{cmd_config_init, cmd_config_show};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_init_then_load_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("salem").join("config.toml");

    cmd_config_init(&path, false).unwrap();
    let config = SalemConfig::from_file(&path).unwrap();
    assert_eq!(config.dataset, PathBuf::from("data/recipes.json"));
    assert_eq!(config.culture.timeout_secs, 30);
}

#[test]
fn test_edited_file_is_honored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "dataset = \"/srv/book.json\"\n\n[culture]\nmodel = \"claude-test\"\napi_key = \"sk-file\"\n",
    )
    .unwrap();

    let config = SalemConfig::from_file(&path).unwrap();
    assert_eq!(config.dataset, PathBuf::from("/srv/book.json"));
    assert_eq!(config.culture.model, "claude-test");

    let shown = cmd_config_show(&config).unwrap();
    assert!(shown.contains("/srv/book.json"));
    assert!(!shown.contains("sk-file"));
}
