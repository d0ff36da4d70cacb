use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "number-baseball", about = "Guess the secret 3-digit number")]
pub struct Args {
    /// Use the line-based menu instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Seed for the secret generator, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the secret while playing
    #[arg(long)]
    pub reveal: bool,

    /// Print the game records as JSON on exit
    #[arg(long)]
    pub json_summary: bool,

    /// Directory for the log file
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}
