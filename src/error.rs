// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid construction.
//!
//! Searching never fails: an empty word stream, words that do not occur, or
//! words longer than the grid side all produce an empty or partial ranking.
//! The only failure is handing [`Grid::from_rows`](crate::Grid::from_rows)
//! something that is not 64x64.

use crate::grid::constants::GRID_SIDE;
use thiserror::Error;

/// The rows supplied for a grid do not form a `GRID_SIDE` x `GRID_SIDE` square.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Wrong number of rows.
    #[error("Grid size must be {side}x{side}: got {found} rows", side = GRID_SIDE)]
    RowCount { found: usize },

    /// A row (possibly empty) has the wrong number of characters.
    #[error(
        "Grid size must be {side}x{side}: row {row} has {found} characters",
        side = GRID_SIDE
    )]
    RowLength { row: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
