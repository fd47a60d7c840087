use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::MealpickError;

const CONFIG_DIR: &str = "mealpick";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus a warning to surface when loading fell back to defaults
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from `override_path`, or the default location
pub fn load_config(override_path: Option<&Path>) -> ConfigResult {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    match load_config_from_path(&path) {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", path.display());
            ConfigResult {
                config,
                warning: None,
            }
        }
        Ok(None) => ConfigResult {
            config: Config::default(),
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}. Using defaults.", e)),
            }
        }
    }
}

/// Read and parse a config file. `Ok(None)` when the file does not exist.
pub fn load_config_from_path(path: &Path) -> Result<Option<Config>, MealpickError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| MealpickError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
