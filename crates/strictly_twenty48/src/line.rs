//! The one-dimensional merge rule.
//!
//! A line is a row or column already oriented so index 0 is the edge
//! the tiles travel toward. Merging compacts non-empty cells toward
//! index 0, combines each adjacent equal pair once (left to right), and
//! compacts again. Every direction of a move is this rule under a
//! different coordinate frame.

use crate::grid::can_merge;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where one source tile ends up after a line merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMove {
    /// Offset of the tile before the merge.
    pub from: usize,
    /// Offset of the tile after the merge.
    pub to: usize,
    /// Value the tile carried before the merge.
    pub value: u32,
    /// True if this tile combined with another into `to`.
    pub merged: bool,
}

/// Result of merging one line with provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMerge {
    /// Merged values, same length as the input, trailing zeros.
    pub values: Vec<u32>,
    /// One entry per non-empty input tile, in input order.
    pub moves: Vec<LineMove>,
}

impl LineMerge {
    /// Number of merges performed (pairs, not tiles).
    pub fn merge_count(&self) -> usize {
        self.moves.iter().filter(|m| m.merged).count() / 2
    }
}

/// Merges one line and returns the new values.
///
/// ```
/// use strictly_twenty48::merge_line;
/// assert_eq!(merge_line(&[2, 2, 2, 0]), vec![4, 2, 0, 0]);
/// assert_eq!(merge_line(&[0, 4, 4, 4]), vec![8, 4, 0, 0]);
/// ```
pub fn merge_line(line: &[u32]) -> Vec<u32> {
    merge_line_traced(line).values
}

/// Merges one line and records where every source tile went.
///
/// Tiles are paired greedily from the travel edge, so among equal
/// values the one nearest the edge claims the nearest destination.
/// A merged tile never merges again in the same pass.
#[instrument(level = "trace")]
pub fn merge_line_traced(line: &[u32]) -> LineMerge {
    let tiles: Vec<(usize, u32)> = line
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| *value != 0)
        .collect();

    let mut values = vec![0; line.len()];
    let mut moves = Vec::with_capacity(tiles.len());
    let mut dest = 0;
    let mut i = 0;

    while i < tiles.len() {
        let (from, value) = tiles[i];
        match tiles.get(i + 1) {
            Some(&(partner, next)) if can_merge(value, next) => {
                values[dest] = value * 2;
                moves.push(LineMove {
                    from,
                    to: dest,
                    value,
                    merged: true,
                });
                moves.push(LineMove {
                    from: partner,
                    to: dest,
                    value,
                    merged: true,
                });
                i += 2;
            }
            _ => {
                values[dest] = value;
                moves.push(LineMove {
                    from,
                    to: dest,
                    value,
                    merged: false,
                });
                i += 1;
            }
        }
        dest += 1;
    }

    LineMerge { values, moves }
}
