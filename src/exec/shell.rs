// src/exec/shell.rs

//! `bash` strategy: hand the raw line to a system shell.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::process::Command;
use tracing::debug;

use crate::errors::InvocationError;
use crate::exec::runner::run_command;
use crate::exec::{Executor, RunFuture};
use crate::sink::LogSink;

/// Interpreters tried in order.
const SHELL_CANDIDATES: [&str; 2] = ["bash", "sh"];

/// Runs a command line through `bash -c`, falling back to `sh -c`.
///
/// The shell parses the line, so pipes, redirects, variable expansion and
/// control flow all work. A missing program inside the line is reported by
/// the shell as a non-zero exit, not as an invocation error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Shell;

impl Shell {
    /// Locate the first available interpreter on `PATH`.
    pub fn resolve() -> Result<PathBuf, InvocationError> {
        SHELL_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .ok_or(InvocationError::NoShell)
    }

    /// Build the process for `line`.
    pub fn command(line: &str) -> Result<Command, InvocationError> {
        let shell = Self::resolve()?;
        let mut cmd = Command::new(shell);
        cmd.arg("-c").arg(line);
        Ok(cmd)
    }
}

impl Executor for Shell {
    fn name(&self) -> &'static str {
        "bash"
    }

    fn run<'a>(
        &'a self,
        line: &'a str,
        sink: Arc<dyn LogSink>,
        capture_stderr: bool,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            let cmd = Shell::command(line)?;
            debug!(
                executor = self.name(),
                shell = ?cmd.as_std().get_program(),
                line,
                "running command"
            );
            run_command(cmd, sink, capture_stderr).await
        })
    }
}
