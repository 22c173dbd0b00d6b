// src/exec/builtin.rs

//! `builtin` strategy: re-run the current binary on the line.

use std::sync::Arc;

use tokio::process::Command;
use tracing::debug;

use crate::errors::InvocationError;
use crate::exec::runner::run_command;
use crate::exec::{Executor, RunFuture};
use crate::sink::LogSink;

/// Flag the host binary accepts to execute a line as a builtin.
pub const BUILTIN_EXEC_FLAG: &str = "--exec";

/// Re-invokes the running program as `<self> --exec <line>`.
///
/// This keeps the command inside the host's own builtin command set instead
/// of a system shell, while still running it in a separate process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Builtin;

impl Builtin {
    /// Build the process for `line`.
    pub fn command(line: &str) -> Result<Command, InvocationError> {
        let exe = std::env::current_exe().map_err(InvocationError::CurrentExe)?;
        let mut cmd = Command::new(exe);
        cmd.arg(BUILTIN_EXEC_FLAG).arg(line);
        Ok(cmd)
    }
}

impl Executor for Builtin {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn run<'a>(
        &'a self,
        line: &'a str,
        sink: Arc<dyn LogSink>,
        capture_stderr: bool,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            let cmd = Builtin::command(line)?;
            debug!(executor = self.name(), line, "re-invoking self");
            run_command(cmd, sink, capture_stderr).await
        })
    }
}
