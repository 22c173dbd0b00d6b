// src/errors.rs

//! Crate-wide error types.
//!
//! Failures are split into three tiers that are never collapsed into one
//! type:
//!
//! - [`RegistryError`] / [`ConfigError`]: configuration mistakes, detected
//!   before any command runs.
//! - [`InvocationError`]: the command could not be started at all.
//! - [`ProcessError`]: the command started but failed on its own terms.

use std::process::ExitStatus;

use thiserror::Error;

/// The requested command never began running.
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("could not split command line: {0}")]
    Tokenize(#[from] shell_words::ParseError),

    #[error("no command defined")]
    EmptyCommand,

    #[error("could not find bash or sh on PATH")]
    NoShell,

    #[error("could not resolve the current executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not acquire {0} pipe of child process")]
    Pipe(&'static str),
}

/// The command ran but did not finish cleanly.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("process exited with {0}")]
    Exit(ExitStatus),

    #[error("waiting for process failed: {0}")]
    Wait(#[source] std::io::Error),

    #[error("{stream} output task failed: {reason}")]
    Output {
        stream: &'static str,
        reason: String,
    },
}

impl ProcessError {
    /// Exit code reported by the process, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Exit(status) => status.code(),
            _ => None,
        }
    }
}

/// Building the executor registry failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("shell interface {0} already exists")]
    DuplicateExecutor(String),
}

/// Loading or validating `Shellexec.toml` failed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ShellexecError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("unknown executor '{name}' (known: {known})")]
    UnknownExecutor { name: String, known: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ShellexecError>;
