//! Strictly Twenty48 - type-safe 2048 game core
//!
//! This library provides the grid state machine of a sliding-tile merge
//! puzzle on an N×N board. Rendering is left to a collaborator that consumes
//! grid snapshots and tile transitions.
//!
//! # Architecture
//!
//! - **Line**: pure one-dimensional merge rule
//! - **Resolver**: applies the line rule in any direction via a coordinate transform
//! - **Spawner**: seeded random tile placement
//! - **Rules**: terminal-state detection
//! - **Game**: the `Playing → Animating → GameOver` orchestrator
//! - **Animation**: stateless interpolation of transitions for display
//!
//! # Example
//!
//! ```
//! use strictly_twenty48::{Direction, GameState, Spawner, SystemClock};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), strictly_twenty48::GridError> {
//! let mut game = GameState::with_parts(4, Spawner::from_seed(7), Arc::new(SystemClock))?;
//!
//! for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     if game.apply_move(direction) {
//!         let transitions = game.take_pending_transitions();
//!         // ... hand `transitions` to the renderer ...
//!         # let _ = transitions;
//!         game.animations_complete();
//!     }
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod animation;
mod clock;
mod config;
mod contracts;
mod direction;
mod error;
mod game;
mod grid;
mod invariants;
mod line;
mod phases;
mod resolver;
mod rules;
mod snapshot;
mod spawner;
mod transition;

#[cfg(kani)]
mod verification;

// Crate-level exports - Grid and geometry
pub use direction::Direction;
pub use grid::{Cell, Grid, MAX_TILE, MIN_GRID_SIZE};

// Crate-level exports - Errors
pub use error::GridError;

// Crate-level exports - Move resolution
pub use line::{LineMerge, LineMove, merge_line, merge_line_traced};
pub use resolver::{MoveOutcome, resolve};
pub use transition::Transition;

// Crate-level exports - Spawning and rules
pub use rules::{has_adjacent_pair, has_empty_cell, is_terminal};
pub use spawner::{SpawnedTile, Spawner};

// Crate-level exports - Orchestration
pub use action::{Action, ActionError};
pub use clock::{Clock, SystemClock};
pub use game::GameState;
pub use phases::Phase;
pub use snapshot::GameSnapshot;

// Crate-level exports - Contracts and invariants
pub use contracts::{
    AcceptingInput, CellInRange, CellIsEmpty, Contract, LegalPlacement, MoveContract,
    PlaceContract,
};
pub use invariants::{
    EndTimeMatchesPhase, Invariant, InvariantSet, InvariantViolation, PhaseMatchesBoard,
    PowerOfTwoTiles, Twenty48Invariants,
};

// Crate-level exports - Animation and configuration
pub use animation::{AnimationPlan, TileSprite, progress, tick_progress};
pub use config::{AnimationConfig, ConfigError, GameConfig};
