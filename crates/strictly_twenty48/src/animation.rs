//! Stateless move animation.
//!
//! Progress is a pure function of elapsed time (or a frame counter), so a
//! renderer can redraw any instant of a move without keeping animation
//! state of its own.

use crate::config::AnimationConfig;
use crate::grid::{Cell, Grid};
use crate::transition::Transition;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Fraction of an animation completed after `elapsed`, clamped to `[0, 1]`.
///
/// A zero-length animation is always complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Fraction of an animation completed after `tick` of `ticks` frames.
pub fn tick_progress(tick: u32, ticks: u32) -> f32 {
    if ticks == 0 {
        return 1.0;
    }
    (tick as f32 / ticks as f32).clamp(0.0, 1.0)
}

/// A tile drawn at a possibly fractional board position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSprite {
    /// Row, fractional while in flight.
    pub row: f32,
    /// Column, fractional while in flight.
    pub col: f32,
    /// Value shown on the tile.
    pub value: u32,
}

impl TileSprite {
    fn at(cell: Cell, value: u32) -> Self {
        Self {
            row: cell.row as f32,
            col: cell.col as f32,
            value,
        }
    }

    fn between(from: Cell, to: Cell, value: u32, t: f32) -> Self {
        let lerp = |a: usize, b: usize| a as f32 + (b as f32 - a as f32) * t;
        Self {
            row: lerp(from.row, to.row),
            col: lerp(from.col, to.col),
            value,
        }
    }
}

/// The transitions of one move, laid out over a fixed duration.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AnimationPlan {
    /// Tiles that slide or merge.
    transitions: Vec<Transition>,
    /// Length of the animation.
    duration: Duration,
}

impl AnimationPlan {
    /// Plans an animation of `transitions` lasting `duration`.
    pub fn new(transitions: Vec<Transition>, duration: Duration) -> Self {
        Self {
            transitions,
            duration,
        }
    }

    /// Plans an animation with configured timing.
    pub fn from_config(transitions: Vec<Transition>, config: &AnimationConfig) -> Self {
        Self::new(transitions, config.duration())
    }

    /// True once `elapsed` covers the whole animation.
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        progress(elapsed, self.duration) >= 1.0
    }

    /// Sprites to draw `elapsed` into the move, given the post-move grid.
    pub fn frame(&self, grid: &Grid, elapsed: Duration) -> Vec<TileSprite> {
        self.frame_at_progress(grid, progress(elapsed, self.duration))
    }

    /// Sprites to draw at progress `t` in `[0, 1]`.
    ///
    /// While in flight, every transition is drawn between its cells with
    /// its pre-move value, and every other post-move tile is drawn in
    /// place. At `t = 1` the frame is exactly the post-move grid.
    #[instrument(skip(self, grid), fields(transitions = self.transitions.len()))]
    pub fn frame_at_progress(&self, grid: &Grid, t: f32) -> Vec<TileSprite> {
        if t >= 1.0 {
            return grid
                .tiles()
                .map(|(cell, value)| TileSprite::at(cell, value))
                .collect();
        }

        let moving = self
            .transitions
            .iter()
            .map(|tr| TileSprite::between(*tr.from(), *tr.to(), *tr.value(), t));

        let resting = grid
            .tiles()
            .filter(|(cell, _)| !self.transitions.iter().any(|tr| tr.to() == cell))
            .map(|(cell, value)| TileSprite::at(cell, value));

        moving.chain(resting).collect()
    }
}
