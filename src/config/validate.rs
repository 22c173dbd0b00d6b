// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::ConfigError;
use crate::exec::ExecutorRegistry;

/// Check a raw config against the registered executors.
pub fn validate_config(
    raw: RawConfigFile,
    registry: &ExecutorRegistry,
) -> Result<ConfigFile, ConfigError> {
    let name = raw.config.executor.trim().to_string();
    if name.is_empty() {
        return Err(ConfigError::Invalid(
            "[config].executor must not be empty".to_string(),
        ));
    }

    if !registry.contains(&name) {
        let known: Vec<&str> = registry.names().collect();
        return Err(ConfigError::Invalid(format!(
            "[config].executor '{}' is not a known executor (expected one of: {})",
            name,
            known.join(", ")
        )));
    }

    let mut section = raw.config;
    section.executor = name;
    Ok(ConfigFile::new_unchecked(section))
}
