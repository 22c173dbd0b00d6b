use std::sync::{Arc, Mutex};

use shellexec::exec::{Executor, RunFuture, RunOutcome};
use shellexec::sink::LogSink;

/// A fake executor that:
/// - records every line it was asked to run
/// - echoes the line to the sink via `say`
/// - reports a successful outcome without spawning anything.
pub struct RecordingExecutor {
    name: &'static str,
    executed: Arc<Mutex<Vec<String>>>,
}

impl RecordingExecutor {
    pub fn new(name: &'static str, executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self { name, executed }
    }
}

impl Executor for RecordingExecutor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run<'a>(
        &'a self,
        line: &'a str,
        sink: Arc<dyn LogSink>,
        _capture_stderr: bool,
    ) -> RunFuture<'a> {
        let executed = Arc::clone(&self.executed);
        Box::pin(async move {
            executed.lock().unwrap().push(line.to_string());
            sink.say(format_args!("{line}"));
            Ok(RunOutcome {
                process: Ok(()),
                captured_stderr: String::new(),
            })
        })
    }
}
