// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::ConfigFile;
use crate::errors::{PollwatchError, Result};

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; merging with the command line
/// and validation happen in [`crate::config::Settings::resolve`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        PollwatchError::Config(format!("reading config file at {:?}: {e}", path))
    })?;

    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}
