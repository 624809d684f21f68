//! Configuration loading and root folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the root folder
pub const ROOT_FOLDER_ENV: &str = "FYYUR_ROOT_FOLDER";

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "fyyur.db";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Optional `config.toml` contents; every key may be omitted
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root_folder: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Merge command-line values over the TOML file over compiled defaults
    ///
    /// `host` and `port` arrive already merged with their environment
    /// variables by the argument parser.
    pub fn resolve(
        root_folder: Option<&Path>,
        host: Option<String>,
        port: Option<u16>,
        toml: &TomlConfig,
    ) -> Self {
        Self {
            root_folder: resolve_root_folder(root_folder, toml),
            host: host
                .or_else(|| toml.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(toml.port).unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }
}

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&Path>, toml: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml.root_folder {
        return path.clone();
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Load a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

/// Load the user config file if present
///
/// A missing file yields defaults; an unreadable or malformed one is logged
/// and also yields defaults so startup never fails on configuration.
pub fn load_default_toml_config() -> TomlConfig {
    let Some(path) = default_config_path() else {
        return TomlConfig::default();
    };
    if !path.exists() {
        return TomlConfig::default();
    }

    match load_toml_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            TomlConfig::default()
        }
    }
}

/// Per-user config file location (`<config dir>/fyyur/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// Get OS-dependent default root folder path
pub fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fyyur"))
        .unwrap_or_else(|| PathBuf::from("./fyyur_data"))
}
