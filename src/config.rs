//! Configuration loading
//!
//! Reads `~/.config/atmention/config.toml`. A missing default file is not an
//! error; an explicitly requested file must exist and parse.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_ENDPOINT, LookupConfig, OverlayConfig};

use crate::error::AtMentionError;

const CONFIG_DIR: &str = "atmention";
const CONFIG_FILE: &str = "config.toml";

/// Location of the default config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, AtMentionError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(AtMentionError::ConfigNotFound(path.to_path_buf()));
            }
            load_config_from_path(path)
        }
        None => match config_path() {
            Some(path) if path.exists() => load_config_from_path(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AtMentionError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents).map_err(|message| AtMentionError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
