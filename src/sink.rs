// src/sink.rs

//! Log sinks that receive the output lines of a running command.
//!
//! A sink has two write operations distinguished by severity: `say` for
//! normal lines (stdout) and `warn` for error-severity lines (stderr). Both
//! take pre-formatted arguments so callers can use `format_args!`.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

/// Destination for streamed command output.
///
/// Implementations are called concurrently from the stdout and stderr pumps
/// and are expected to return promptly.
pub trait LogSink: Send + Sync {
    /// Record a normal output line.
    fn say(&self, args: fmt::Arguments<'_>);

    /// Record an error-severity output line.
    fn warn(&self, args: fmt::Arguments<'_>);
}

/// Sink that forwards every line to `tracing`.
///
/// `say` lines are emitted at INFO and `warn` lines at WARN, both under the
/// `shellexec::output` target with a `stream` field naming the executor
/// that produced them.
#[derive(Debug, Clone)]
pub struct TracingSink {
    stream: String,
}

impl TracingSink {
    pub fn new(stream: impl Into<String>) -> Self {
        Self {
            stream: stream.into(),
        }
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }
}

impl LogSink for TracingSink {
    fn say(&self, args: fmt::Arguments<'_>) {
        info!(target: "shellexec::output", stream = %self.stream, "{}", args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        warn!(target: "shellexec::output", stream = %self.stream, "{}", args);
    }
}

/// Sink that writes lines unchanged to this process's own stdout / stderr.
///
/// Used by the `--exec` entry point so the parent process sees the child's
/// output without any log formatting.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioSink;

impl LogSink for StdioSink {
    fn say(&self, args: fmt::Arguments<'_>) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{args}").and_then(|()| out.flush()) {
            debug!(error = %e, "stdout write failed; dropping line");
        }
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(std::io::stderr().lock(), "{args}") {
            debug!(error = %e, "stderr write failed; dropping line");
        }
    }
}

/// Severity of a line recorded by [`MemorySink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Say,
    Warn,
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in arrival order.
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines recorded with the given severity, in arrival order.
    pub fn lines_with(&self, severity: Severity) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, line)| line)
            .collect()
    }

    /// Whether any recorded line (of either severity) contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, line)| line.contains(needle))
    }

    fn push(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, args.to_string()));
    }
}

impl fmt::Display for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (severity, line) in self.lines() {
            match severity {
                Severity::Say => writeln!(f, "{line}")?,
                Severity::Warn => writeln!(f, "WARN {line}")?,
            }
        }
        Ok(())
    }
}

impl LogSink for MemorySink {
    fn say(&self, args: fmt::Arguments<'_>) {
        self.push(Severity::Say, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.push(Severity::Warn, args);
    }
}
