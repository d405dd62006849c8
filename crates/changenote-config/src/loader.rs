//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult, find_ancestor_containing, find_entry_ignore_case};

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = ".changelog.json";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file is missing, cannot be read, or is not valid JSON.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a directory holding `.changelog.json`
/// (name matched ignoring case) is found. A missing file is not an error.
///
/// # Errors
///
/// Returns an error if a configuration file is found but cannot be read or parsed.
pub fn find_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Option<Config>> {
    let start_dir = start_dir.as_ref();

    let Some(config_path) = find_ancestor_containing(start_dir, |dir| {
        find_entry_ignore_case(dir, CONFIG_FILE_NAME).is_some_and(|path| path.is_file())
    })
    .and_then(|dir| find_entry_ignore_case(&dir, CONFIG_FILE_NAME)) else {
        debug!(?start_dir, "no configuration file found");
        return Ok(None);
    };

    debug!(path = ?config_path, "configuration file found");
    load_config(config_path).map(Some)
}
