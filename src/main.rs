//! draw-number CLI - guess the secret number.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use draw_number::{
    ConfigLoader, Controller, GameRng, MissingResourcePolicy, StreamSurface, Surface,
    TerminalSurface,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "draw-number")]
#[command(version)]
#[command(about = "Guess the secret number before the attempts run out")]
struct Cli {
    /// Path to the `key:value` game configuration
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Seed for the secret; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// File receiving a copy of every notification (repeatable)
    #[arg(long = "log-file", default_value = "out.log")]
    log_files: Vec<PathBuf>,

    /// Do not write notifications to any log file
    #[arg(long, conflicts_with = "log_files")]
    no_log_file: bool,

    /// Do not echo notifications to stdout
    #[arg(long)]
    no_console_log: bool,

    /// Fail when the configuration file is missing or unreadable
    #[arg(long)]
    strict_config: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut surfaces: Vec<Box<dyn Surface>> = vec![Box::new(TerminalSurface::stdio())];
    if !cli.no_console_log {
        surfaces.push(Box::new(StreamSurface::stdout()));
    }
    let log_files: &[PathBuf] = if cli.no_log_file { &[] } else { &cli.log_files };
    for path in log_files {
        let surface = StreamSurface::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        surfaces.push(Box::new(surface));
    }

    let policy = if cli.strict_config {
        MissingResourcePolicy::Fail
    } else {
        MissingResourcePolicy::Continue
    };
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    let mut controller = Controller::new(surfaces, &ConfigLoader::new(policy), &cli.config, rng)
        .with_context(|| format!("Failed to start with configuration {}", cli.config.display()))?;

    controller.run();
    info!("goodbye");
    Ok(())
}
