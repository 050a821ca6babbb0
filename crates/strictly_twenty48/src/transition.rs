//! Tile transitions handed to the renderer.

use crate::grid::{Cell, MAX_TILE};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tile's journey during a single move.
///
/// Transitions are ephemeral: the resolver creates them fresh for each
/// accepted move and the renderer discards them once the animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Transition {
    /// Cell the tile started in.
    from: Cell,
    /// Cell the tile ends in.
    to: Cell,
    /// Value the tile carries while travelling.
    value: u32,
    /// Value of the combined tile, present only for merges.
    merge_value: Option<u32>,
}

impl Transition {
    /// A tile sliding from `from` to `to` without merging.
    pub fn slide(from: Cell, to: Cell, value: u32) -> Self {
        Self {
            from,
            to,
            value,
            merge_value: None,
        }
    }

    /// A tile travelling into `to` where it combines with its partner.
    ///
    /// `value` is below [`MAX_TILE`](crate::MAX_TILE) for any real merge.
    pub fn merge(from: Cell, to: Cell, value: u32) -> Self {
        debug_assert!(value < MAX_TILE, "tile {value} cannot merge");
        Self {
            from,
            to,
            value,
            merge_value: Some(value.saturating_mul(2)),
        }
    }

    /// Returns true if this tile combines with another.
    pub fn is_merge(&self) -> bool {
        self.merge_value.is_some()
    }

    /// Returns true if the tile changes cell.
    pub fn is_displacement(&self) -> bool {
        self.from != self.to
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.merge_value {
            Some(merged) => write!(f, "{} {} -> {} (merges into {})", self.value, self.from, self.to, merged),
            None => write!(f, "{} {} -> {}", self.value, self.from, self.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_doubles_value() {
        let t = Transition::merge(Cell::new(0, 3), Cell::new(0, 0), 8);
        assert!(t.is_merge());
        assert_eq!(*t.merge_value(), Some(16));
        assert_eq!(*t.value(), 8);
    }

    #[test]
    fn test_display() {
        let t = Transition::slide(Cell::new(1, 2), Cell::new(1, 0), 4);
        assert_eq!(t.to_string(), "4 (1, 2) -> (1, 0)");
        assert!(t.is_displacement());
        assert!(!t.is_merge());
    }
}
