// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `shellexec`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shellexec",
    version,
    about = "Run a command line through a pluggable executor, streaming its output to the log.",
    long_about = None
)]
pub struct CliArgs {
    /// Command line to run, passed as a single argument (quote it).
    #[arg(
        value_name = "COMMAND",
        required_unless_present_any = ["exec", "list"],
        conflicts_with = "exec"
    )]
    pub command: Option<String>,

    /// Executor strategy: `exec`, `bash` or `builtin`.
    ///
    /// Default: `[config].executor`, else `bash`.
    #[arg(long, value_name = "NAME")]
    pub executor: Option<String>,

    /// Buffer stderr and include it in the failure report.
    #[arg(long)]
    pub capture_stderr: bool,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Shellexec.toml` is used when it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHELLEXEC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Execute LINE as a builtin. Used by the `builtin` executor when it
    /// re-invokes this binary.
    #[arg(long = "exec", value_name = "LINE", allow_hyphen_values = true)]
    pub exec: Option<String>,

    /// Print the registered executor names and exit.
    #[arg(long)]
    pub list: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
