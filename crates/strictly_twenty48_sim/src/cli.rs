//! Command-line interface for the headless driver.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Twenty48 Sim - plays 2048 games without a screen
#[derive(Parser, Debug)]
#[command(name = "twenty48_sim")]
#[command(about = "Drive the 2048 core through full games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board edge length (overrides the config file)
    #[arg(long)]
    pub size: Option<usize>,

    /// Spawner seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many accepted moves
    #[arg(long, default_value = "10000")]
    pub max_moves: usize,

    /// How directions are chosen
    #[arg(long, value_enum, default_value_t = Strategy::Cycle)]
    pub strategy: Strategy,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Direction selection strategy.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Strategy {
    /// Up, Down, Left, Right in turn
    Cycle,
    /// Uniformly random direction each turn
    Random,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["twenty48_sim"]);
        assert_eq!(cli.strategy, Strategy::Cycle);
        assert_eq!(cli.max_moves, 10000);
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "twenty48_sim",
            "--size",
            "5",
            "--seed",
            "9",
            "--strategy",
            "random",
            "--json",
        ]);
        assert_eq!(cli.size, Some(5));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.strategy, Strategy::Random);
        assert!(cli.json);
    }
}
