//! Portalcrawl - Entry Point
//!
//! Parses arguments, sets up logging and configuration, and hands the
//! console to the game loop.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use portalcrawl::data::{default_config_path, GameConfig};
use portalcrawl::ui::{Console, ScriptedConsole, StdConsole};
use portalcrawl::{Game, GameError};

/// A turn-based text dungeon crawler
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Hero name
    #[arg(long)]
    name: Option<String>,

    /// Config file (RON); defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replay commands from a file instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Where diagnostics are written
    #[arg(long, default_value = "portalcrawl.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    log::info!("Starting Portalcrawl v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => default_config_path()
            .map(|path| GameConfig::load_or_default(&path))
            .unwrap_or_default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(name) = args.name.clone() {
        config.player_name = name;
    }

    let mut console: Box<dyn Console> = match &args.script {
        Some(path) => Box::new(
            ScriptedConsole::from_file(path)
                .with_context(|| format!("reading script {}", path.display()))?
                .with_echo(true),
        ),
        None => Box::new(StdConsole::new()),
    };

    let mut game = Game::new(config).context("starting the run")?;
    match game.run(console.as_mut()) {
        Ok(summary) => {
            console.print(&summary.to_string());
            log::info!("Run finished: {}", summary);
            Ok(())
        }
        Err(GameError::InputClosed) => {
            log::info!("Input closed on stage {}", game.stage());
            console.print(&format!("\nFarewell. {}", game.summary()));
            Ok(())
        }
        Err(e) => {
            log::error!("Game exited with error: {}", e);
            Err(e.into())
        }
    }
}

/// Log to a file so diagnostics never interleave with the game text
fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&args.log_file)
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // Can't open the log file; keep stderr but only for real problems
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    builder.init();
}
