//! Game phases of the turn state machine.

use serde::{Deserialize, Serialize};

/// Where the game is in its turn cycle.
///
/// ```text
/// Playing --move (moved)--> Animating --animations complete--> Playing | GameOver
/// Playing --place (terminal)--> GameOver
/// any --restart--> Playing
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Phase {
    /// Accepting moves and placements.
    #[default]
    Playing,
    /// A move was committed; waiting for the renderer to finish animating it.
    Animating,
    /// No move can change the board.
    GameOver,
}

impl Phase {
    /// Returns true if moves and placements are accepted.
    pub fn accepts_input(self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Returns true if the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}
