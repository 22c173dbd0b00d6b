// tests/command_runner.rs

mod common;
use crate::common::{has_sh, init_tracing, with_timeout};

use std::sync::Arc;

use tokio::process::Command;

use shellexec::errors::ProcessError;
use shellexec::exec::run_command;
use shellexec::sink::{LogSink, MemorySink, Severity};

fn sh(script: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(script);
    cmd
}

async fn run_script(script: &str, capture: bool) -> (shellexec::exec::RunResult, Arc<MemorySink>) {
    let log = Arc::new(MemorySink::new());
    let sink: Arc<dyn LogSink> = log.clone();
    let result = with_timeout(run_command(sh(script), sink, capture)).await;
    (result, log)
}

#[tokio::test]
async fn stdout_lines_arrive_in_order() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let (result, log) = run_script("i=0; while [ $i -lt 200 ]; do echo line$i; i=$((i+1)); done", false).await;
    assert!(result.expect("sh should start").success());

    let expected: Vec<String> = (0..200).map(|i| format!("line{i}")).collect();
    assert_eq!(log.lines_with(Severity::Say), expected);
}

#[tokio::test]
async fn each_stream_keeps_its_own_order() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let script = "for i in 1 2 3 4 5; do echo out$i; echo err$i >&2; done";
    let (result, log) = run_script(script, true).await;
    let outcome = result.expect("sh should start");

    assert_eq!(
        log.lines_with(Severity::Say),
        vec!["out1", "out2", "out3", "out4", "out5"]
    );
    assert_eq!(
        log.lines_with(Severity::Warn),
        vec!["err1", "err2", "err3", "err4", "err5"]
    );
    assert_eq!(outcome.captured_stderr, "err1\nerr2\nerr3\nerr4\nerr5\n");
}

#[tokio::test]
async fn large_output_on_both_streams_does_not_deadlock() {
    init_tracing();
    if !has_sh() {
        return;
    }

    // Well past a 64 KiB pipe buffer on each stream.
    let script = "i=0; while [ $i -lt 5000 ]; do \
                  echo 'stdout stdout stdout stdout stdout stdout'; \
                  echo 'stderr stderr stderr stderr stderr stderr' >&2; \
                  i=$((i+1)); done";
    let (result, log) = run_script(script, false).await;
    let outcome = result.expect("sh should start");

    assert!(outcome.success());
    assert_eq!(log.lines_with(Severity::Say).len(), 5000);
    assert_eq!(log.lines_with(Severity::Warn).len(), 5000);
    assert_eq!(outcome.captured_stderr, "");
}

#[tokio::test]
async fn crlf_and_unterminated_lines_are_normalised() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let (result, log) = run_script(r"printf 'one\r\ntwo\nthree'", false).await;
    assert!(result.expect("sh should start").success());

    assert_eq!(log.lines_with(Severity::Say), vec!["one", "two", "three"]);
}

#[tokio::test]
async fn very_long_lines_are_not_truncated() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let script = "head -c 300000 /dev/zero | tr '\\0' x; echo";
    let (result, log) = run_script(script, false).await;
    assert!(result.expect("sh should start").success());

    let lines = log.lines_with(Severity::Say);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 300_000);
}

#[tokio::test]
async fn exit_code_is_reported_after_streams_drain() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let (result, log) = run_script("echo last words; echo oops >&2; exit 42", true).await;
    let outcome = result.expect("sh should start");

    assert_eq!(outcome.exit_code(), Some(42));
    assert!(log.contains("last words"));
    assert_eq!(outcome.captured_stderr, "oops\n");
}

#[cfg(unix)]
#[tokio::test]
async fn killed_process_has_no_exit_code() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let (result, _log) = run_script("kill -9 $$", false).await;
    let outcome = result.expect("sh should start");

    assert!(!outcome.success());
    assert_eq!(outcome.exit_code(), None);
}

/// Sink whose `say` always panics.
struct PanickingSink;

impl LogSink for PanickingSink {
    fn say(&self, _args: std::fmt::Arguments<'_>) {
        panic!("sink boom");
    }

    fn warn(&self, _args: std::fmt::Arguments<'_>) {}
}

#[tokio::test]
async fn panicking_sink_is_reported_as_output_failure() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let sink: Arc<dyn LogSink> = Arc::new(PanickingSink);
    let result = with_timeout(run_command(sh("echo hi; echo there"), sink, false)).await;
    let outcome = result.expect("sh should start");

    match outcome.process {
        Err(ProcessError::Output { stream, reason }) => {
            assert_eq!(stream, "stdout");
            assert!(reason.contains("panicked"), "reason: {reason}");
        }
        other => panic!("expected stdout output failure, got {other:?}"),
    }
}
