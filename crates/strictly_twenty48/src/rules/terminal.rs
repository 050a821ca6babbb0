//! Terminal-state detection.

use crate::grid::{Cell, Grid, can_merge};
use tracing::instrument;

/// Checks if the grid has at least one empty cell.
pub fn has_empty_cell(grid: &Grid) -> bool {
    !grid.is_full()
}

/// Checks if any two horizontally or vertically adjacent tiles can merge.
///
/// Only right and down neighbours are visited; that covers every pair once.
pub fn has_adjacent_pair(grid: &Grid) -> bool {
    let size = grid.size();
    let value = |row, col| grid.get(Cell::new(row, col)).unwrap_or_default();
    for row in 0..size {
        for col in 0..size {
            let here = value(row, col);
            if col + 1 < size && can_merge(here, value(row, col + 1)) {
                return true;
            }
            if row + 1 < size && can_merge(here, value(row + 1, col)) {
                return true;
            }
        }
    }
    false
}

/// Returns true when no move can change the board.
///
/// That is exactly: the board is full and no two neighbours match.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_terminal(grid: &Grid) -> bool {
    !has_empty_cell(grid) && !has_adjacent_pair(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::resolver::resolve;

    fn grid(rows: Vec<Vec<u32>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn checkerboard() -> Grid {
        grid(vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ])
    }

    #[test]
    fn test_full_checkerboard_is_terminal() {
        assert!(is_terminal(&checkerboard()));
    }

    #[test]
    fn test_full_grid_with_one_pair_is_not_terminal() {
        let g = grid(vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 4],
        ]);
        assert!(!has_empty_cell(&g));
        assert!(has_adjacent_pair(&g));
        assert!(!is_terminal(&g));
    }

    #[test]
    fn test_vertical_pair_is_detected() {
        let g = grid(vec![vec![2, 4], vec![2, 8]]);
        assert!(!is_terminal(&g));
    }

    #[test]
    fn test_single_empty_cell_is_not_terminal() {
        let g = grid(vec![
            vec![2, 4, 8, 16],
            vec![32, 64, 128, 256],
            vec![512, 1024, 2048, 4096],
            vec![8192, 16384, 32768, 0],
        ]);
        assert!(has_empty_cell(&g));
        assert!(!has_adjacent_pair(&g));
        assert!(!is_terminal(&g));
    }

    #[test]
    fn test_full_board_of_max_tiles_is_terminal() {
        use crate::grid::MAX_TILE;
        let g = grid(vec![vec![MAX_TILE, MAX_TILE], vec![MAX_TILE, MAX_TILE]]);
        assert!(!has_adjacent_pair(&g));
        assert!(is_terminal(&g));
        for direction in Direction::ALL {
            assert!(!resolve(&g, direction).moved);
        }
    }

    #[test]
    fn test_empty_board_is_not_terminal() {
        assert!(!is_terminal(&Grid::empty(4).unwrap()));
    }

    #[test]
    fn test_terminal_means_no_direction_moves() {
        let g = checkerboard();
        for direction in Direction::ALL {
            assert!(!resolve(&g, direction).moved);
        }
    }
}
