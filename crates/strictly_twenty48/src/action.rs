//! First-class action types for 2048.
//!
//! Actions are the inputs a collaborator sends to the game. They are
//! plain values, so they can be logged, validated against contracts,
//! and dispatched through one entry point.

use crate::direction::Direction;
use crate::grid::Cell;
use crate::phases::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An input to the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Slide and merge toward a direction.
    Move(Direction),
    /// Drop a 2 or 4 onto a chosen empty cell.
    Place(Cell),
    /// The renderer finished animating the last move.
    AnimationsComplete,
    /// Start over with a fresh board.
    Restart,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(direction) => write!(f, "Move {direction}"),
            Action::Place(cell) => write!(f, "Place at {cell}"),
            Action::AnimationsComplete => write!(f, "Animations complete"),
            Action::Restart => write!(f, "Restart"),
        }
    }
}

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The game is not in a phase that accepts this input.
    #[display("Input not accepted while {}", _0)]
    NotAccepting(Phase),

    /// The target cell is off the board.
    #[display("Cell {} is outside a {}x{} grid", cell, size, size)]
    OutOfRange {
        /// Requested cell.
        cell: Cell,
        /// Board edge length.
        size: usize,
    },

    /// The target cell already holds a tile.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Cell),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Move(Direction::Up).to_string(), "Move Up");
        assert_eq!(Action::Place(Cell::new(1, 2)).to_string(), "Place at (1, 2)");
    }

    #[test]
    fn test_error_messages() {
        let err = ActionError::OutOfRange {
            cell: Cell::new(4, 0),
            size: 4,
        };
        assert_eq!(err.to_string(), "Cell (4, 0) is outside a 4x4 grid");
        assert_eq!(
            ActionError::NotAccepting(Phase::Animating).to_string(),
            "Input not accepted while Animating"
        );
    }
}
