// src/exec/mod.rs

//! Process execution layer.
//!
//! Every way of running a command line is an [`Executor`]: a named strategy
//! that turns the line into a `tokio::process::Command` and hands it to the
//! shared [`runner`].
//!
//! - [`pump`] drains one output stream line by line.
//! - [`runner`] spawns the process, pumps stdout/stderr concurrently and
//!   collects the exit status.
//! - [`direct`], [`shell`] and [`builtin`] are the three strategies.
//! - [`registry`] maps strategy names to executors.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::{InvocationError, ProcessError};
use crate::sink::LogSink;

pub mod builtin;
pub mod direct;
pub mod pump;
pub mod registry;
pub mod runner;
pub mod shell;

pub use builtin::{BUILTIN_EXEC_FLAG, Builtin};
pub use direct::Direct;
pub use registry::{DEFAULT_EXECUTOR, ExecutorRegistry};
pub use runner::run_command;
pub use shell::Shell;

/// Result of a started process.
#[derive(Debug)]
pub struct RunOutcome {
    /// `Err` when the process exited non-zero, was killed, or its output
    /// could not be processed.
    pub process: Result<(), ProcessError>,
    /// Stderr lines joined by `\n`; empty unless capture was requested.
    pub captured_stderr: String,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.process.is_ok()
    }

    /// Exit code to report for this run: `0` on success, the child's code
    /// when it exited non-zero, `None` if it was killed or output failed.
    pub fn exit_code(&self) -> Option<i32> {
        match &self.process {
            Ok(()) => Some(0),
            Err(e) => e.exit_code(),
        }
    }
}

/// `Err` means the command was never started; there is no outcome to report.
pub type RunResult = Result<RunOutcome, InvocationError>;

/// Boxed future returned by [`Executor::run`].
pub type RunFuture<'a> = Pin<Box<dyn Future<Output = RunResult> + Send + 'a>>;

/// A named strategy for turning a command line into a running process.
///
/// Implementations are stateless and shared behind `Arc` in the
/// [`ExecutorRegistry`].
pub trait Executor: Send + Sync {
    /// Registry name of this strategy.
    fn name(&self) -> &'static str;

    /// Run `line`, streaming its output to `sink`.
    ///
    /// From the caller's side this is one awaited call; the output pumps are
    /// joined before it resolves.
    fn run<'a>(
        &'a self,
        line: &'a str,
        sink: Arc<dyn LogSink>,
        capture_stderr: bool,
    ) -> RunFuture<'a>;

    /// Stop any running command. No strategy supports this yet, so it is
    /// always a no-op.
    fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
