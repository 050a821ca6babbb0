//! Formal verification of the line merge using the Kani model checker.
//!
//! These proof harnesses verify merge properties for every line of four
//! tiles, over the full range of values a grid accepts.

use crate::grid::{MAX_TILE, can_merge};
use crate::line::{merge_line, merge_line_traced};

/// Builds an arbitrary line of 0 or powers of two from 2 to `MAX_TILE`.
fn any_line() -> [u32; 4] {
    let exponents: [u8; 4] = kani::any();
    let mut line = [0u32; 4];
    for (slot, e) in line.iter_mut().zip(exponents) {
        kani::assume(e <= 31);
        *slot = if e == 0 { 0 } else { 1u32 << e };
    }
    line
}

/// Proves: tiles end up packed at the front with no gaps.
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_leaves_no_gaps() {
    let line = any_line();
    let merged = merge_line(&line);
    let tiles = merged.iter().filter(|v| **v != 0).count();
    assert!(merged[..tiles].iter().all(|v| *v != 0));
    assert!(merged[tiles..].iter().all(|v| *v == 0));
}

/// Proves: a merged line is left alone by the next merge exactly when it
/// holds no mergeable neighbours.
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_fixed_point() {
    let line = any_line();
    let once = merge_line(&line);
    let has_pair = once.windows(2).any(|w| can_merge(w[0], w[1]));
    assert_eq!(merge_line(&once) == once, !has_pair);
}

/// Proves: length and tile sum are preserved.
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_conserves() {
    let line = any_line();
    let merged = merge_line(&line);

    assert_eq!(merged.len(), line.len());
    let before: u64 = line.iter().map(|v| u64::from(*v)).sum();
    let after: u64 = merged.iter().map(|v| u64::from(*v)).sum();
    assert_eq!(before, after);
}

/// Proves: outputs stay valid tiles, at most double the largest input.
#[kani::proof]
#[kani::unwind(6)]
fn verify_merge_bounded() {
    let line = any_line();
    let max_in = u64::from(line.iter().copied().max().unwrap_or(0));
    let merged = merge_line(&line);
    assert!(merged.iter().all(|v| *v <= MAX_TILE));
    assert!(merged.iter().all(|v| u64::from(*v) <= max_in * 2));
}

/// Proves: the trace accounts for every source tile exactly once.
#[kani::proof]
#[kani::unwind(6)]
fn verify_trace_covers_tiles() {
    let line = any_line();
    let trace = merge_line_traced(&line);
    let tiles = line.iter().filter(|v| **v != 0).count();
    assert_eq!(trace.moves.len(), tiles);
    assert!(trace.moves.iter().all(|m| m.to <= m.from));
}
