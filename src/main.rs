use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use number_baseball::{args::Args, cli::MenuController, secret::SecretGenerator, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args.log_dir)?;

    let generator = match args.seed {
        Some(seed) => SecretGenerator::seeded(seed),
        None => SecretGenerator::from_entropy(),
    };

    let history = if args.plain {
        let stdin = io::stdin();
        let mut controller =
            MenuController::new(stdin.lock(), io::stdout(), generator).reveal_secret(args.reveal);
        controller.run()?;
        controller.into_history()
    } else {
        run_ui(generator, args.reveal)?
    };

    if args.json_summary {
        let mut stdout = io::stdout();
        serde_json::to_writer_pretty(&mut stdout, &history.report())
            .context("failed to write JSON summary")?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Logs go to a daily rolling file so they never draw over the terminal UI.
fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, "number-baseball.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
