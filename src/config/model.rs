// src/config/model.rs

//! TOML data model for `Shellexec.toml`.
//!
//! ```toml
//! [config]
//! executor = "bash"
//! capture_stderr = false
//! ```

use serde::Deserialize;

use crate::exec::DEFAULT_EXECUTOR;

/// Config file as deserialized, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,
}

/// The `[config]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigSection {
    /// Name of the executor strategy used when `--executor` is not given.
    pub executor: String,
    /// Buffer stderr for the error report when `--capture-stderr` is not given.
    pub capture_stderr: bool,
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            executor: DEFAULT_EXECUTOR.to_string(),
            capture_stderr: false,
        }
    }
}

/// Validated configuration.
///
/// Only constructed through [`crate::config::validate_config`], so the
/// executor name is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub config: ConfigSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection) -> Self {
        Self { config }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(ConfigSection::default())
    }
}
