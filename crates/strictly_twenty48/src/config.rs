//! Game configuration loaded from TOML.

use crate::grid::MIN_GRID_SIZE;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// Every field has a default, so an empty file is a valid configuration:
///
/// ```toml
/// grid_size = 4
/// seed = 42
///
/// [animation]
/// duration_ms = 150
/// ticks = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length.
    grid_size: usize,

    /// Spawner seed; `None` seeds from the operating system.
    seed: Option<u64>,

    /// How moves are animated.
    animation: AnimationConfig,
}

/// Animation timing for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Wall-clock length of one move animation.
    duration_ms: u64,

    /// Frames per animation for frame-counted renderers.
    ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            seed: None,
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 150,
            ticks: 10,
        }
    }
}

impl AnimationConfig {
    /// The animation length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl GameConfig {
    /// Creates a configuration with default animation timing.
    pub fn new(grid_size: usize, seed: Option<u64>) -> Self {
        Self {
            grid_size,
            seed,
            animation: AnimationConfig::default(),
        }
    }

    /// Replaces the board size.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Replaces the spawner seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(grid_size = config.grid_size, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::new(format!(
                "grid_size must be at least {}, got {}",
                MIN_GRID_SIZE, self.grid_size
            )));
        }
        if self.animation.ticks == 0 {
            return Err(ConfigError::new("animation.ticks must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
