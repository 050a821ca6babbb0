//! Serializable view of a game for the renderer boundary.

use crate::grid::Grid;
use crate::phases::Phase;
use crate::spawner::SpawnedTile;
use crate::transition::Transition;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame of the game.
///
/// The grid serializes as a list of rows and is validated again on the
/// way back in, so a snapshot can never carry an illegal board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current board.
    pub grid: Grid,
    /// Current phase.
    pub phase: Phase,
    /// True once no move can change the board.
    pub game_over: bool,
    /// Milliseconds since the game started, frozen at game over.
    pub elapsed_ms: u64,
    /// Transitions of the last move not yet taken by the renderer.
    pub transitions: Vec<Transition>,
    /// Tile most recently spawned or placed.
    pub last_spawn: Option<SpawnedTile>,
}

impl GameSnapshot {
    /// Highest tile on the board, or 0 when empty.
    pub fn max_tile(&self) -> u32 {
        self.grid.tiles().map(|(_, value)| value).max().unwrap_or(0)
    }
}
