//! Unit tests for configuration resolution
//!
//! Root folder priority: CLI argument > FYYUR_ROOT_FOLDER > config.toml > default.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate FYYUR_ROOT_FOLDER are marked with #[serial].

use fyyur_common::config::{
    default_root_folder, load_toml_config, resolve_root_folder, Settings, TomlConfig,
    DEFAULT_HOST, DEFAULT_PORT, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};

fn toml_with_root(path: &str) -> TomlConfig {
    TomlConfig {
        root_folder: Some(PathBuf::from(path)),
        ..Default::default()
    }
}

#[test]
#[serial]
fn test_cli_arg_wins() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-env");
    let toml = toml_with_root("/tmp/fyyur-toml");

    let root = resolve_root_folder(Some(Path::new("/tmp/fyyur-cli")), &toml);
    assert_eq!(root, PathBuf::from("/tmp/fyyur-cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_env_var_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-env");
    let toml = toml_with_root("/tmp/fyyur-toml");

    let root = resolve_root_folder(None, &toml);
    assert_eq!(root, PathBuf::from("/tmp/fyyur-env"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_toml_beats_default() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml = toml_with_root("/tmp/fyyur-toml");

    let root = resolve_root_folder(None, &toml);
    assert_eq!(root, PathBuf::from("/tmp/fyyur-toml"));
}

#[test]
#[serial]
fn test_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let root = resolve_root_folder(None, &TomlConfig::default());
    assert_eq!(root, default_root_folder());
    assert!(!root.as_os_str().is_empty());
}

#[test]
#[serial]
fn test_settings_defaults_and_database_path() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml = toml_with_root("/tmp/fyyur-root");

    let settings = Settings::resolve(None, None, None, &toml);
    assert_eq!(settings.host, DEFAULT_HOST);
    assert_eq!(settings.port, DEFAULT_PORT);
    assert_eq!(settings.database_path(), PathBuf::from("/tmp/fyyur-root/fyyur.db"));
}

#[test]
#[serial]
fn test_settings_cli_over_toml() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml = TomlConfig {
        root_folder: None,
        host: Some("0.0.0.0".to_string()),
        port: Some(8080),
    };

    let settings = Settings::resolve(None, None, Some(9000), &toml);
    assert_eq!(settings.host, "0.0.0.0");
    assert_eq!(settings.port, 9000);
}

#[test]
fn test_load_toml_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "root_folder = \"/srv/fyyur\"\nport = 5050\n").unwrap();

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/fyyur")));
    assert_eq!(config.port, Some(5050));
    assert_eq!(config.host, None);
}

#[test]
fn test_load_malformed_toml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    let err = load_toml_config(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
