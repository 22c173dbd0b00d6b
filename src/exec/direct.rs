// src/exec/direct.rs

//! `exec` strategy: no interpreter, the line is split into argv directly.

use std::sync::Arc;

use tokio::process::Command;
use tracing::debug;

use crate::errors::InvocationError;
use crate::exec::runner::run_command;
use crate::exec::{Executor, RunFuture};
use crate::sink::LogSink;

/// Runs a command line without a shell.
///
/// Quoting and escaping follow shell word-splitting rules, but there is no
/// variable expansion, globbing or pipelines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Direct;

impl Direct {
    /// Build the process for `line`.
    pub fn command(line: &str) -> Result<Command, InvocationError> {
        let argv = shell_words::split(line)?;
        let (program, args) = argv.split_first().ok_or(InvocationError::EmptyCommand)?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok(cmd)
    }
}

impl Executor for Direct {
    fn name(&self) -> &'static str {
        "exec"
    }

    fn run<'a>(
        &'a self,
        line: &'a str,
        sink: Arc<dyn LogSink>,
        capture_stderr: bool,
    ) -> RunFuture<'a> {
        Box::pin(async move {
            debug!(executor = self.name(), line, "running command");
            let cmd = Direct::command(line)?;
            run_command(cmd, sink, capture_stderr).await
        })
    }
}

