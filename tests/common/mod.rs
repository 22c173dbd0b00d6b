#![allow(dead_code)]

use std::sync::Arc;

use shellexec::exec::{Executor, RunResult};
use shellexec::sink::{LogSink, MemorySink};

pub use shellexec_test_utils::{has_sh, init_tracing, with_timeout};

/// Run `line` on `executor` with a fresh [`MemorySink`], returning both.
pub async fn run_logged(
    executor: &dyn Executor,
    line: &str,
    capture_stderr: bool,
) -> (RunResult, Arc<MemorySink>) {
    let log = Arc::new(MemorySink::new());
    let sink: Arc<dyn LogSink> = log.clone();
    let result = with_timeout(executor.run(line, sink, capture_stderr)).await;
    (result, log)
}
