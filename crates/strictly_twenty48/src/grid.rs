//! Core grid types for 2048.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Smallest supported board edge.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest tile a cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// A cell coordinate on the grid, zero-based, `(0, 0)` top-left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Cell {
    /// Row index (top to bottom).
    pub row: usize,
    /// Column index (left to right).
    pub col: usize,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// N×N board of tile values.
///
/// `0` is an empty cell; any other entry is a power of two, at least 2.
/// Grids are values: every move produces a new grid rather than
/// editing the old one, so "did anything move" is a plain `!=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Grid {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<u32>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `size` is below [`MIN_GRID_SIZE`].
    #[instrument]
    pub fn empty(size: usize) -> Result<Self, GridError> {
        if size < MIN_GRID_SIZE {
            return Err(GridError::TooSmall(size));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Builds a grid from rows, validating shape and tile values.
    ///
    /// # Errors
    ///
    /// - [`GridError::TooSmall`] for fewer than [`MIN_GRID_SIZE`] rows
    /// - [`GridError::NotSquare`] if a row length differs from the row count
    /// - [`GridError::InvalidTile`] for a non-zero value that is not a power of two ≥ 2
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size < MIN_GRID_SIZE {
            return Err(GridError::TooSmall(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile {
                        cell: Cell::new(row, col),
                        value,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Returns the board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Returns the value at `cell`, or `None` if it is off the board.
    pub fn get(&self, cell: Cell) -> Option<u32> {
        if self.contains(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    /// Checks if the cell is on the board and empty.
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell) == Some(0)
    }

    /// Returns every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.tiles_with_empty()
            .filter(|(_, value)| *value == 0)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Iterates over occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.tiles_with_empty().filter(|(_, value)| *value != 0)
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|v| **v != 0).count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|v| u64::from(*v)).sum()
    }

    /// Checks if the board has no empty cell.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|v| *v != 0)
    }

    /// Returns the board as a list of rows.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.size).map(<[u32]>::to_vec).collect()
    }

    /// Returns a copy of this grid with `cell` set to `value`.
    ///
    /// Callers guarantee `cell` is on the board and `value` is a valid tile.
    pub(crate) fn with_tile(&self, cell: Cell, value: u32) -> Self {
        debug_assert!(self.contains(cell), "cell {cell} off a {}x{} grid", self.size, self.size);
        debug_assert!(is_valid_tile(value), "invalid tile value {value}");
        let mut next = self.clone();
        let idx = next.index(cell);
        next.cells[idx] = value;
        next
    }

    /// Builds a grid from raw row-major cells produced by the resolver.
    pub(crate) fn from_cells(size: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Rotates the board 90° clockwise: the left edge becomes the top edge.
    #[instrument(skip(self))]
    pub fn rotate_clockwise(&self) -> Self {
        let n = self.size;
        let mut cells = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                cells[row * n + col] = self.cells[(n - 1 - col) * n + row];
            }
        }
        Self::from_cells(n, cells)
    }

    /// Rotates the board 90° counter-clockwise: the top edge becomes the left edge.
    #[instrument(skip(self))]
    pub fn rotate_counter_clockwise(&self) -> Self {
        let n = self.size;
        let mut cells = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                cells[row * n + col] = self.cells[col * n + (n - 1 - row)];
            }
        }
        Self::from_cells(n, cells)
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    fn tiles_with_empty(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, value)| (Cell::new(idx / size, idx % size), *value))
    }
}

/// Checks whether `value` may occupy a cell: empty, or a power of two
/// from 2 to [`MAX_TILE`].
pub(crate) fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Checks whether two neighbouring values combine into one tile.
///
/// Tiles at [`MAX_TILE`] have no larger value to become, so they stay apart.
pub(crate) fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1)
            .max(1);
        let separator = vec!["-".repeat(width); self.size].join("+");

        for (row_idx, row) in self.cells.chunks(self.size).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line = row
                .iter()
                .map(|v| {
                    if *v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
