//! Whole-grid move resolution.
//!
//! Pure: takes a grid and a direction, returns the next grid and the
//! transitions the renderer should animate. No randomness, no state.

use crate::direction::Direction;
use crate::grid::Grid;
use crate::line::merge_line_traced;
use crate::transition::Transition;
use tracing::{debug, instrument};

/// Outcome of resolving a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after sliding and merging.
    pub grid: Grid,
    /// True iff `grid` differs from the input grid in any cell.
    pub moved: bool,
    /// Tiles that changed cell or took part in a merge, in line order.
    pub transitions: Vec<Transition>,
}

impl MoveOutcome {
    /// Number of merges (pairs combined) in this move.
    pub fn merge_count(&self) -> usize {
        self.transitions.iter().filter(|t| t.is_merge()).count() / 2
    }
}

/// Slides and merges every line of `grid` toward `direction`.
///
/// Each line is read through the direction's frame (offset 0 on the edge
/// of travel), merged with [`merge_line_traced`], and written back
/// through the same frame. Transitions are derived from the merge trace,
/// so ties among equal values follow positional order along the line.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn resolve(grid: &Grid, direction: Direction) -> MoveOutcome {
    let size = grid.size();
    let mut cells = vec![0; size * size];
    let mut transitions = Vec::new();

    for line in 0..size {
        let values: Vec<u32> = (0..size)
            .map(|offset| {
                let cell = direction.cell(line, offset, size);
                grid.get(cell).unwrap_or_default()
            })
            .collect();

        let merge = merge_line_traced(&values);

        for (offset, value) in merge.values.iter().enumerate() {
            let cell = direction.cell(line, offset, size);
            cells[cell.row * size + cell.col] = *value;
        }

        for step in merge.moves.iter().filter(|m| m.merged || m.from != m.to) {
            let from = direction.cell(line, step.from, size);
            let to = direction.cell(line, step.to, size);
            transitions.push(if step.merged {
                Transition::merge(from, to, step.value)
            } else {
                Transition::slide(from, to, step.value)
            });
        }
    }

    let next = Grid::from_cells(size, cells);
    let moved = next != *grid;
    debug!(
        %direction,
        moved,
        transitions = transitions.len(),
        "Resolved move"
    );

    MoveOutcome {
        grid: next,
        moved,
        transitions,
    }
}
