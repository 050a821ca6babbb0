//! Movement directions and the line frame each one induces.
//!
//! Every direction is the same one-dimensional merge applied along a
//! different coordinate frame. A line is addressed by `(line, offset)`
//! where offset 0 sits on the edge the tiles travel toward; the frame
//! maps that pair back to a grid cell. Keeping all four directions on
//! this single mapping is what makes them symmetric.

use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A direction to slide and merge tiles.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Maps `(line, offset)` to a grid cell for a board of `size`.
    ///
    /// Offset 0 is the edge of travel. Lines run across the movement axis:
    /// rows for `Left`/`Right`, columns for `Up`/`Down`.
    pub fn cell(self, line: usize, offset: usize, size: usize) -> Cell {
        debug_assert!(line < size && offset < size);
        let far = size - 1 - offset;
        match self {
            Direction::Left => Cell::new(line, offset),
            Direction::Right => Cell::new(line, far),
            Direction::Up => Cell::new(offset, line),
            Direction::Down => Cell::new(far, line),
        }
    }

    /// The direction that plays this role after the board is rotated
    /// 90° counter-clockwise.
    #[instrument]
    pub fn rotated_counter_clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_frame_covers_every_cell_once() {
        let size = 4;
        for direction in Direction::iter() {
            let cells: HashSet<Cell> = (0..size)
                .flat_map(|line| (0..size).map(move |offset| direction.cell(line, offset, size)))
                .collect();
            assert_eq!(cells.len(), size * size, "{direction} frame is not a bijection");
        }
    }

    #[test]
    fn test_offset_zero_is_edge_of_travel() {
        let size = 5;
        for line in 0..size {
            assert_eq!(Direction::Left.cell(line, 0, size).col, 0);
            assert_eq!(Direction::Right.cell(line, 0, size).col, size - 1);
            assert_eq!(Direction::Up.cell(line, 0, size).row, 0);
            assert_eq!(Direction::Down.cell(line, 0, size).row, size - 1);
        }
    }

    #[test]
    fn test_rotation_cycles_through_all_directions() {
        for direction in Direction::iter() {
            let mut d = direction;
            for _ in 0..4 {
                d = d.rotated_counter_clockwise();
            }
            assert_eq!(d, direction);
        }
        assert_eq!(Direction::ALL.len(), Direction::iter().count());
    }
}
