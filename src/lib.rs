// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod sink;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_and_validate};
use crate::errors::{Result, ShellexecError};
use crate::exec::{Direct, Executor, ExecutorRegistry, RunResult};
use crate::sink::{LogSink, StdioSink, TracingSink};

/// Exit code for a command that could not be started, or for bad
/// configuration.
pub const EXIT_INVOCATION_ERROR: i32 = 2;

/// High-level entry point used by `main.rs`.
///
/// Returns the exit code the binary should terminate with:
/// - `0` when the command succeeded,
/// - the child's exit code when it failed (`1` if it has none),
/// - [`EXIT_INVOCATION_ERROR`] when it could not be started.
pub async fn run(args: CliArgs) -> Result<i32> {
    let registry = ExecutorRegistry::with_builtins()?;

    if args.list {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(0);
    }

    // `--exec` is the re-entry point of the `builtin` executor: run the line
    // in this process's builtin mode and stream plain output to the parent.
    if let Some(line) = args.exec.as_deref() {
        let sink: Arc<dyn LogSink> = Arc::new(StdioSink);
        let result = Direct.run(line, sink, false).await;
        return Ok(exit_code_for(line, result));
    }

    let cfg = load_config(args.config.as_deref(), &registry)?;

    let name = args
        .executor
        .as_deref()
        .unwrap_or(cfg.config.executor.as_str());
    let executor = registry
        .get(name)
        .ok_or_else(|| ShellexecError::UnknownExecutor {
            name: name.to_string(),
            known: registry.names().collect::<Vec<_>>().join(", "),
        })?;

    let capture_stderr = args.capture_stderr || cfg.config.capture_stderr;
    let line = args.command.as_deref().unwrap_or_default();

    debug!(executor = name, capture_stderr, line, "dispatching command");

    let sink: Arc<dyn LogSink> = Arc::new(TracingSink::new(name));
    let result = executor.run(line, sink, capture_stderr).await;
    Ok(exit_code_for(line, result))
}

/// Load the config from an explicit path, or from the default path when it
/// exists. A missing explicit file is an error; a missing default is not.
fn load_config(path: Option<&str>, registry: &ExecutorRegistry) -> Result<ConfigFile> {
    match path {
        Some(p) => Ok(load_and_validate(p, registry)?),
        None => {
            let default = default_config_path();
            if Path::new(&default).is_file() {
                Ok(load_and_validate(&default, registry)?)
            } else {
                debug!(path = ?default, "no config file found; using defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Report a run result through `tracing` and map it to an exit code.
pub fn exit_code_for(line: &str, result: RunResult) -> i32 {
    match result {
        Err(err) => {
            error!(line, error = %err, "command could not be started");
            EXIT_INVOCATION_ERROR
        }
        Ok(outcome) => match outcome.process {
            Ok(()) => 0,
            Err(err) => {
                if outcome.captured_stderr.is_empty() {
                    warn!(line, error = %err, "command failed");
                } else {
                    warn!(
                        line,
                        error = %err,
                        stderr = %outcome.captured_stderr.trim_end(),
                        "command failed"
                    );
                }
                err.exit_code().filter(|code| *code != 0).unwrap_or(1)
            }
        },
    }
}
