//! Config file loading
//!
//! Reads `deskmate/config.toml` from the platform config directory. A missing
//! file yields the default configuration; a malformed file is an error so typos
//! do not silently disable features.

use std::path::{Path, PathBuf};

use crate::error::DeskmateError;

use super::types::Config;

/// Default config file location, e.g. `~/.config/deskmate/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskmate").join("config.toml"))
}

/// Load configuration from an explicit path, or the default location when
/// `path` is `None`. A missing file is not an error.
pub fn load(path: Option<&Path>) -> Result<Config, DeskmateError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| DeskmateError::ConfigRead(format!("{}: {e}", path.display())))?;
    toml::from_str(&contents).map_err(|e| DeskmateError::ConfigParse(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
