// src/exec/runner.rs

//! Command runner shared by every executor strategy.
//!
//! This is the only place where a constructed [`Command`] turns into a
//! running process. Stdout and stderr are drained by two independent Tokio
//! tasks so a child that fills one pipe while the other is unread cannot
//! deadlock; both tasks are joined before the exit status is collected.

use std::process::Stdio;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::process::Command;
use tokio::task::JoinError;
use tracing::{debug, info};

use crate::errors::{InvocationError, ProcessError};
use crate::exec::pump::pump;
use crate::exec::{RunOutcome, RunResult};
use crate::sink::LogSink;

/// Run `command`, streaming stdout to `sink.say` and stderr to `sink.warn`.
///
/// If `capture_stderr` is true, stderr lines are also collected (each
/// followed by `\n`) and returned in [`RunOutcome::captured_stderr`];
/// otherwise that field is always empty.
pub async fn run_command(
    mut command: Command,
    sink: Arc<dyn LogSink>,
    capture_stderr: bool,
) -> RunResult {
    let program = command
        .as_std()
        .get_program()
        .to_string_lossy()
        .into_owned();

    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(|source| InvocationError::Spawn {
        program: program.clone(),
        source,
    })?;

    let stdout = child.stdout.take().ok_or(InvocationError::Pipe("stdout"))?;
    let stderr = child.stderr.take().ok_or(InvocationError::Pipe("stderr"))?;

    debug!(program = %program, pid = ?child.id(), "process started");

    // Only the stderr pump appends, but both pumps run concurrently with each
    // other; keep every access behind the lock.
    let buffer = Arc::new(Mutex::new(String::new()));

    let out_sink = Arc::clone(&sink);
    let out_task = tokio::spawn(async move {
        pump(stdout, |line| out_sink.say(format_args!("{line}"))).await;
    });

    let err_sink = Arc::clone(&sink);
    let err_buffer = Arc::clone(&buffer);
    let err_task = tokio::spawn(async move {
        pump(stderr, |line| {
            err_sink.warn(format_args!("{line}"));
            if capture_stderr {
                let mut buf = err_buffer.lock().unwrap_or_else(PoisonError::into_inner);
                buf.push_str(line);
                buf.push('\n');
            }
        })
        .await;
    });

    let (out_res, err_res) = tokio::join!(out_task, err_task);

    let pump_failure = pump_error("stdout", out_res).or_else(|| pump_error("stderr", err_res));

    let exit = match child.wait().await {
        Ok(status) => {
            info!(
                program = %program,
                exit_code = ?status.code(),
                success = status.success(),
                "process exited"
            );
            if status.success() {
                Ok(())
            } else {
                Err(ProcessError::Exit(status))
            }
        }
        Err(e) => Err(ProcessError::Wait(e)),
    };

    let process = match pump_failure {
        Some(err) => Err(err),
        None => exit,
    };

    // Both pumps have joined; nothing else appends from here on.
    let captured_stderr =
        std::mem::take(&mut *buffer.lock().unwrap_or_else(PoisonError::into_inner));

    Ok(RunOutcome {
        process,
        captured_stderr,
    })
}

fn pump_error(stream: &'static str, res: Result<(), JoinError>) -> Option<ProcessError> {
    res.err().map(|e| ProcessError::Output {
        stream,
        reason: e.to_string(),
    })
}
