//! Timer invariant: the end time is recorded exactly at game over.

use super::Invariant;
use crate::game::GameState;

/// Invariant: an end time exists if and only if the game is over.
pub struct EndTimeMatchesPhase;

impl Invariant<GameState> for EndTimeMatchesPhase {
    fn holds(game: &GameState) -> bool {
        game.end_time().is_some() == game.is_game_over()
    }

    fn description() -> &'static str {
        "End time is set exactly when the game is over"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Spawner, SystemClock};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn test_running_game_has_no_end_time() {
        let game = GameState::with_parts(4, Spawner::from_seed(0), Arc::new(SystemClock)).unwrap();
        assert!(EndTimeMatchesPhase::holds(&game));
    }

    #[test]
    fn test_stray_end_time_violates() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 0]]).unwrap();
        let mut game = GameState::from_grid(grid, Spawner::from_seed(0), Arc::new(SystemClock));
        game.ended_at = Some(Instant::now());
        assert!(!EndTimeMatchesPhase::holds(&game));
    }
}
