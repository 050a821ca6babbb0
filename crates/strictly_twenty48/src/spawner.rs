//! Random tile spawning.

use crate::grid::{Cell, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Probability that a new tile is a 2 rather than a 4.
const TWO_PROBABILITY: f64 = 0.5;

/// A tile added to the board outside of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct SpawnedTile {
    /// Where the tile appeared.
    pub cell: Cell,
    /// Its value (2 or 4).
    pub value: u32,
}

/// Places new tiles on uniformly random empty cells.
///
/// The RNG is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    /// Wraps an existing RNG.
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Creates a deterministic spawner from a seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a spawner seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Restarts the random sequence from `seed`.
    #[instrument(skip(self))]
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Draws a new tile value: 2 or 4 with equal probability.
    pub fn tile_value(&mut self) -> u32 {
        if self.rng.random_bool(TWO_PROBABILITY) {
            2
        } else {
            4
        }
    }

    /// Adds one tile to a uniformly chosen empty cell.
    ///
    /// Returns `None` and leaves the board alone when it is full.
    #[instrument(skip(self, grid), fields(empty = tracing::field::Empty))]
    pub fn spawn(&mut self, grid: &Grid) -> Option<(Grid, SpawnedTile)> {
        let empty = grid.empty_cells();
        tracing::Span::current().record("empty", empty.len());
        if empty.is_empty() {
            debug!("No empty cell to spawn into");
            return None;
        }

        let cell = empty[self.rng.random_range(0..empty.len())];
        let value = self.tile_value();
        debug!(%cell, value, "Spawned tile");
        Some((grid.with_tile(cell, value), SpawnedTile::new(cell, value)))
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::from_entropy()
    }
}
