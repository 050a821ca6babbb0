//! Phase consistency invariant: the phase agrees with the board.

use super::Invariant;
use crate::game::GameState;
use crate::phases::Phase;
use crate::rules::is_terminal;
use tracing::warn;

/// Invariant: `GameOver` exactly when the board is terminal.
///
/// A `Playing` game always has a move left and a `GameOver` game never
/// does. `Animating` is unconstrained: the board between a move and its
/// spawn is not a resting state.
pub struct PhaseMatchesBoard;

impl Invariant<GameState> for PhaseMatchesBoard {
    fn holds(game: &GameState) -> bool {
        let terminal = is_terminal(game.current_grid());
        let valid = match game.phase() {
            Phase::Playing => !terminal,
            Phase::GameOver => terminal,
            Phase::Animating => true,
        };
        if !valid {
            warn!(phase = %game.phase(), terminal, "Phase disagrees with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Game is over exactly when no move can change the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Spawner, SystemClock};
    use std::sync::Arc;

    fn game_on(rows: Vec<Vec<u32>>) -> GameState {
        GameState::from_grid(Grid::from_rows(rows).unwrap(), Spawner::from_seed(0), Arc::new(SystemClock))
    }

    #[test]
    fn test_terminal_board_is_game_over() {
        let game = game_on(vec![vec![2, 4], vec![4, 2]]);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(PhaseMatchesBoard::holds(&game));
    }

    #[test]
    fn test_playing_on_terminal_board_violates() {
        let mut game = game_on(vec![vec![2, 4], vec![4, 2]]);
        game.phase = Phase::Playing;
        assert!(!PhaseMatchesBoard::holds(&game));
    }
}
