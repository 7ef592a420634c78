//! Terminal front end for College Chronicles.

mod play;
mod render;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "NSI_LOG";

#[derive(Parser)]
#[command(
    name = "nsi",
    about = "College Chronicles: a text adventure at Not-So Ivy League College",
    version
)]
struct Cli {
    /// Campus definition file (JSON). Defaults to the built-in campus.
    #[arg(short, long)]
    campus: Option<PathBuf>,

    /// RNG seed for reproducible scantron placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seconds between scantron placements
    #[arg(long, default_value = "120")]
    interval_secs: u64,

    /// Seconds to wait for the placement task when quitting
    #[arg(long, default_value = "5")]
    grace_secs: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = play::PlayOptions {
        campus: cli.campus,
        seed: cli.seed,
        interval_secs: cli.interval_secs,
        grace_secs: cli.grace_secs,
    };

    if let Err(e) = play::run(&options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
