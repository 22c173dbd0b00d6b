// src/main.rs

use shellexec::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("shellexec error: {err:?}");
            std::process::exit(shellexec::EXIT_INVOCATION_ERROR);
        }
    }
}

async fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    // `--exec` children keep their stderr for command output.
    let default_level = if args.exec.is_some() {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    logging::init_logging(args.log_level, default_level)?;
    Ok(run(args).await?)
}
