//! Grid construction errors.

use crate::grid::{Cell, MIN_GRID_SIZE};
use derive_more::{Display, Error};

/// Error raised when a grid cannot be built.
///
/// These are construction-time failures; once a grid exists every
/// operation on it is total.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Board edge below the supported minimum.
    #[display("Grid size {} is below the minimum of {}", _0, MIN_GRID_SIZE)]
    TooSmall(#[error(not(source))] usize),

    /// A row's length differs from the number of rows.
    #[display("Row {} has {} cells, expected {}", row, len, size)]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected edge length.
        size: usize,
    },

    /// A cell holds a value that is neither empty nor a power of two ≥ 2.
    #[display("Cell {} holds invalid tile value {}", cell, value)]
    InvalidTile {
        /// Offending cell.
        cell: Cell,
        /// Offending value.
        value: u32,
    },
}
