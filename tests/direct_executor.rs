// tests/direct_executor.rs

mod common;
use crate::common::{has_sh, init_tracing, run_logged};

use shellexec::errors::{InvocationError, ProcessError};
use shellexec::exec::{Direct, Executor};
use shellexec::sink::Severity;

#[tokio::test]
async fn quoted_arguments_are_kept_together() {
    init_tracing();
    if !has_sh() {
        return;
    }

    // No shell in between: `$HOME` stays literal, quotes group words.
    let (result, log) = run_logged(&Direct, r#"echo "a  b" '$HOME'"#, false).await;
    let outcome = result.expect("echo should start");

    assert!(outcome.success());
    assert_eq!(log.lines_with(Severity::Say), vec!["a  b $HOME".to_string()]);
}

#[tokio::test]
async fn unbalanced_quote_is_an_invocation_error() {
    init_tracing();

    let (result, log) = run_logged(&Direct, "echo 'unterminated", false).await;

    assert!(matches!(result, Err(InvocationError::Tokenize(_))));
    assert!(log.lines().is_empty());
}

#[tokio::test]
async fn empty_line_is_an_invocation_error() {
    init_tracing();

    for line in ["", "   ", "\t"] {
        let (result, _log) = run_logged(&Direct, line, false).await;
        match result {
            Err(InvocationError::EmptyCommand) => {}
            other => panic!("expected EmptyCommand for {line:?}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn missing_program_is_an_invocation_error() {
    init_tracing();

    let (result, _log) = run_logged(&Direct, "definitelynosuchcommand123 --flag", false).await;

    match result {
        Err(InvocationError::Spawn { program, .. }) => {
            assert_eq!(program, "definitelynosuchcommand123");
        }
        other => panic!("expected Spawn error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_zero_exit_is_a_process_error() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let (result, log) = run_logged(&Direct, "sh -c 'echo before; exit 3'", false).await;
    let outcome = result.expect("sh should start");

    assert!(matches!(outcome.process, Err(ProcessError::Exit(_))));
    assert_eq!(outcome.exit_code(), Some(3));
    assert!(log.contains("before"));
}

#[tokio::test]
async fn stderr_capture_works_without_a_shell_wrapper() {
    init_tracing();
    if !has_sh() {
        return;
    }

    let (result, log) = run_logged(&Direct, "sh -c 'echo one >&2; echo two >&2'", true).await;
    let outcome = result.expect("sh should start");

    assert!(outcome.success());
    assert_eq!(outcome.captured_stderr, "one\ntwo\n");
    assert_eq!(
        log.lines_with(Severity::Warn),
        vec!["one".to_string(), "two".to_string()]
    );
}

#[test]
fn command_splits_program_and_arguments() {
    let cmd = Direct::command(r#"prog --name "x y" z"#).expect("should tokenize");
    let std_cmd = cmd.as_std();

    assert_eq!(std_cmd.get_program(), "prog");
    let args: Vec<_> = std_cmd.get_args().collect();
    assert_eq!(args, vec!["--name", "x y", "z"]);
}

#[test]
fn direct_executor_metadata() {
    assert_eq!(Direct.name(), "exec");
    assert!(Direct.stop().is_ok());
}
