//! Property tests for move resolution across all four directions.
//!
//! Every direction is checked against its rotated counterpart, so a bug in
//! any single coordinate frame shows up as a symmetry failure.

use proptest::prelude::*;
use strictly_twenty48::{Cell, Direction, Grid, Transition, merge_line, resolve};

fn arb_grid() -> impl Strategy<Value = Grid> {
    (2usize..=5)
        .prop_flat_map(|n| prop::collection::vec(0u32..=6, n * n).prop_map(move |e| (n, e)))
        .prop_map(|(n, exponents)| {
            let rows = exponents
                .chunks(n)
                .map(|row| row.iter().map(|e| if *e == 0 { 0 } else { 1 << e }).collect())
                .collect();
            Grid::from_rows(rows).unwrap()
        })
}

fn arb_line() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(prop_oneof![Just(0u32), Just(2), Just(4), Just(8)], 1..8)
}

/// Where a cell of the counter-clockwise rotated board lands after
/// rotating back clockwise.
fn unrotate(cell: Cell, size: usize) -> Cell {
    Cell::new(cell.col, size - 1 - cell.row)
}

fn sorted(mut transitions: Vec<Transition>) -> Vec<(Cell, Cell, u32, bool)> {
    transitions.sort_by_key(|t| (*t.from(), *t.to()));
    transitions
        .into_iter()
        .map(|t| (*t.from(), *t.to(), *t.value(), t.is_merge()))
        .collect()
}

proptest! {
    #[test]
    fn resolve_commutes_with_rotation(grid in arb_grid()) {
        let n = grid.size();
        for direction in Direction::ALL {
            let direct = resolve(&grid, direction);
            let rotated = resolve(&grid.rotate_counter_clockwise(), direction.rotated_counter_clockwise());

            prop_assert_eq!(&direct.grid, &rotated.grid.rotate_clockwise());
            prop_assert_eq!(direct.moved, rotated.moved);

            let mapped: Vec<Transition> = rotated
                .transitions
                .iter()
                .map(|t| {
                    let (from, to) = (unrotate(*t.from(), n), unrotate(*t.to(), n));
                    if t.is_merge() {
                        Transition::merge(from, to, *t.value())
                    } else {
                        Transition::slide(from, to, *t.value())
                    }
                })
                .collect();
            prop_assert_eq!(sorted(direct.transitions), sorted(mapped));
        }
    }

    #[test]
    fn resolve_conserves_sum_and_counts_merges(grid in arb_grid()) {
        for direction in Direction::ALL {
            let outcome = resolve(&grid, direction);
            prop_assert_eq!(outcome.grid.tile_sum(), grid.tile_sum());
            prop_assert_eq!(outcome.grid.tile_count() + outcome.merge_count(), grid.tile_count());
            prop_assert_eq!(outcome.moved, outcome.grid != grid);
            prop_assert_eq!(outcome.moved, !outcome.transitions.is_empty());
        }
    }

    #[test]
    fn move_without_merges_is_final(grid in arb_grid()) {
        for direction in Direction::ALL {
            let once = resolve(&grid, direction);
            if once.merge_count() == 0 {
                prop_assert!(!resolve(&once.grid, direction).moved);
            }
        }
    }

    #[test]
    fn merge_line_leaves_no_gaps(line in arb_line()) {
        let once = merge_line(&line);
        prop_assert_eq!(once.len(), line.len());
        let tiles = once.iter().filter(|v| **v != 0).count();
        prop_assert!(once[..tiles].iter().all(|v| *v != 0));
        prop_assert!(once[tiles..].iter().all(|v| *v == 0));
    }

    #[test]
    fn merge_line_is_stable_exactly_without_pairs(line in arb_line()) {
        let once = merge_line(&line);
        let has_pair = once.windows(2).any(|w| w[0] != 0 && w[0] == w[1]);
        prop_assert_eq!(merge_line(&once) == once, !has_pair);
    }
}
