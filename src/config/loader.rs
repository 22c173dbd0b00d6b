// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::config::validate::validate_config;
use crate::errors::ConfigError;
use crate::exec::ExecutorRegistry;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to
/// also check the executor name.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile, ConfigError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it against `registry`.
pub fn load_and_validate(
    path: impl AsRef<Path>,
    registry: &ExecutorRegistry,
) -> Result<ConfigFile, ConfigError> {
    let raw = load_from_path(path)?;
    validate_config(raw, registry)
}

/// `Shellexec.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Shellexec.toml")
}
