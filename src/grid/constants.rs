// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the word grid.
//!
//! The grid is always square with side [`GRID_SIDE`]. This is fixed at compile
//! time: every [`Grid`](crate::grid::Grid) has exactly this shape, so nothing
//! downstream needs to check it again.

/// Side length of the grid (number of rows, and characters per row).
pub const GRID_SIDE: usize = 64;

/// Total number of cells in the grid.
///
/// Every cell is a potential starting position for a match, in each
/// [`Direction`](crate::grid::Direction).
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Maximum number of words returned by [`Searcher::find`](crate::Searcher::find).
pub const MAX_RESULTS: usize = 10;

/// Filler character used by the sample grid for cells that hold no word.
pub const FILLER: char = '|';

const _: () = assert!(GRID_SIDE > 0, "grid must have at least one cell");

/// The ranking can never ask for more words than there are starting cells.
const _: () = assert!(MAX_RESULTS <= GRID_CELLS);
