//! Tile value invariant: every tile is a power of two, at least 2.

use super::Invariant;
use crate::game::GameState;
use crate::grid::is_valid_tile;

/// Invariant: every non-empty cell holds a power of two ≥ 2.
pub struct PowerOfTwoTiles;

impl Invariant<GameState> for PowerOfTwoTiles {
    fn holds(game: &GameState) -> bool {
        game.current_grid()
            .tiles()
            .all(|(_, value)| is_valid_tile(value))
    }

    fn description() -> &'static str {
        "Every tile is a power of two of at least 2"
    }
}
