//! Twenty48 Sim - headless driver for the 2048 core
//!
//! Plays complete games with a fixed strategy, animating every move the
//! way a renderer would, and reports the final board.

#![warn(missing_docs)]

mod cli;
mod driver;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_twenty48::{GameConfig, GameState};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

/// Builds the configuration, plays one game and prints the result.
#[instrument(skip(cli), fields(strategy = %cli.strategy))]
fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    info!(grid_size = config.grid_size(), seed = ?config.seed(), "Starting game");

    let mut game = GameState::from_config(&config).context("Failed to start game")?;
    let summary = driver::play(
        &mut game,
        config.animation(),
        cli.strategy,
        *config.seed(),
        cli.max_moves,
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        println!("{}", game.current_grid());
        println!();
        println!(
            "{} after {} moves ({} rejected) in {:.3}s",
            if game.is_game_over() { "Game over" } else { "Stopped" },
            summary.moves,
            summary.rejected,
            game.elapsed_time().as_secs_f64()
        );
    }
    Ok(())
}

/// Reads the config file if given and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_grid_size(size);
    }
    if cli.seed.is_some() {
        config = config.with_seed(cli.seed);
    }
    config.validate()?;
    Ok(config)
}
