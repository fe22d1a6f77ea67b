//! Configuration loading
//!
//! Reads `~/.config/quicksearch/config.toml` (or an explicit path). A missing
//! file means defaults; a broken file means defaults plus a warning that the
//! UI can surface, never a hard failure.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{CatalogConfig, Config, SearchConfig};

use crate::error::SearchError;

/// Loaded configuration and an optional warning to show the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config path for this platform
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quicksearch").join("config.toml"))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult::default(),
    }
}

/// Load the config from `path`, falling back to defaults
pub fn load_config_from(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("config {} not loaded: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config error ({}), using defaults", e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, SearchError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
