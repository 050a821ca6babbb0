//! Contract-based validation for 2048.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::ActionError;
use crate::direction::Direction;
use crate::game::GameState;
use crate::grid::Cell;
use crate::invariants::{InvariantSet, Twenty48Invariants};
use crate::phases::Phase;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must be `Playing`.
pub struct AcceptingInput;

impl AcceptingInput {
    /// Fails with `NotAccepting` outside `Playing`.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), ActionError> {
        if game.phase().accepts_input() {
            Ok(())
        } else {
            Err(ActionError::NotAccepting(game.phase()))
        }
    }
}

/// Precondition: the target cell must be on the board.
pub struct CellInRange;

impl CellInRange {
    /// Fails with `OutOfRange` for a cell off the board.
    #[instrument(skip(game))]
    pub fn check(cell: &Cell, game: &GameState) -> Result<(), ActionError> {
        let grid = game.current_grid();
        if grid.contains(*cell) {
            Ok(())
        } else {
            Err(ActionError::OutOfRange {
                cell: *cell,
                size: grid.size(),
            })
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `Occupied` for a cell holding a tile.
    #[instrument(skip(game))]
    pub fn check(cell: &Cell, game: &GameState) -> Result<(), ActionError> {
        if game.current_grid().is_empty_at(*cell) {
            Ok(())
        } else {
            Err(ActionError::Occupied(*cell))
        }
    }
}

/// Composite precondition: a placement is legal while playing, on an
/// empty cell that is on the board.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(cell: &Cell, game: &GameState) -> Result<(), ActionError> {
        AcceptingInput::check(game)?;
        CellInRange::check(cell, game)?;
        CellIsEmpty::check(cell, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for accepted moves.
///
/// Preconditions:
/// - Game is `Playing`
///
/// Postconditions:
/// - Tile sum is unchanged (merging `v + v` yields `2v`)
/// - Tile count drops by exactly the number of merges
/// - Game is `Animating`
/// - All invariants hold
pub struct MoveContract;

impl Contract<GameState, Direction> for MoveContract {
    fn pre(game: &GameState, _direction: &Direction) -> Result<(), ActionError> {
        AcceptingInput::check(game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ActionError> {
        let (old, new) = (before.current_grid(), after.current_grid());

        if old.tile_sum() != new.tile_sum() {
            return Err(ActionError::InvariantViolation(format!(
                "Tile sum changed from {} to {}",
                old.tile_sum(),
                new.tile_sum()
            )));
        }

        let merges = after
            .pending_transitions()
            .iter()
            .filter(|t| t.is_merge())
            .count()
            / 2;
        if old.tile_count() != new.tile_count() + merges {
            return Err(ActionError::InvariantViolation(format!(
                "Tile count went from {} to {} with {} merges",
                old.tile_count(),
                new.tile_count(),
                merges
            )));
        }

        if after.phase() != Phase::Animating {
            return Err(ActionError::InvariantViolation(format!(
                "Accepted move left the game {}",
                after.phase()
            )));
        }

        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Place Contract
// ─────────────────────────────────────────────────────────────

/// Contract for direct placements.
///
/// Preconditions:
/// - Game is `Playing`
/// - Cell is on the board and empty
///
/// Postconditions:
/// - Exactly one tile was added
/// - All invariants hold
pub struct PlaceContract;

impl Contract<GameState, Cell> for PlaceContract {
    fn pre(game: &GameState, cell: &Cell) -> Result<(), ActionError> {
        LegalPlacement::check(cell, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ActionError> {
        let (old, new) = (before.current_grid().tile_count(), after.current_grid().tile_count());
        if new != old + 1 {
            return Err(ActionError::InvariantViolation(format!(
                "Placement changed tile count from {old} to {new}"
            )));
        }
        check_invariants(after)
    }
}

/// Verifies all invariants using the composed set.
fn check_invariants(game: &GameState) -> Result<(), ActionError> {
    Twenty48Invariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        ActionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Logs a failed postcondition and asserts in debug builds.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn assert_postcondition(result: Result<(), ActionError>) {
    if let Err(err) = &result {
        warn!(%err, "Postcondition violated");
    }
    debug_assert!(result.is_ok(), "{:?}", result);
}
