//! Game rules for 2048.
//!
//! This module contains pure functions for evaluating a grid according
//! to the rules. Rules are separated from grid storage so contracts and
//! invariants can compose them.

pub mod terminal;

pub use terminal::{has_adjacent_pair, has_empty_cell, is_terminal};
