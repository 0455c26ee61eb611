// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scan directions.
//!
//! Words are read along exactly two axes, always forwards and never wrapping
//! at the edge of the grid:
//!
//! - [`Direction::Horizontal`]: left to right along a row (increasing column)
//! - [`Direction::Vertical`]: top to bottom down a column (increasing row)
//!
//! The set is closed. The scan visits directions in [`Direction::iter`] order,
//! which is part of the tie-break contract for the ranking.

use crate::grid::constants::GRID_SIDE;
use crate::grid::Grid;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// An axis along which a word may be read.
///
/// Declaration order is scan order, and the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro)]
pub enum Direction {
    /// Along a row, increasing column.
    Horizontal,
    /// Down a column, increasing row.
    Vertical,
}

impl Direction {
    /// Iterate over all directions in scan order.
    pub fn iter() -> DirectionIter {
        <Self as IntoEnumIterator>::iter()
    }

    /// Does a run of `len` characters starting at (`row`, `column`) stay inside the grid?
    pub fn fits(self, row: usize, column: usize, len: usize) -> bool {
        let start = match self {
            Direction::Horizontal => column,
            Direction::Vertical => row,
        };
        start
            .checked_add(len)
            .is_some_and(|end| end <= GRID_SIDE)
    }

    /// The cell `offset` steps away from (`row`, `column`) in this direction.
    pub fn step(self, row: usize, column: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, column + offset),
            Direction::Vertical => (row + offset, column),
        }
    }

    /// Try to read `word` starting at (`row`, `column`) in this direction.
    ///
    /// The bounds check happens here, once. An empty word fits everywhere and
    /// matches everywhere, since there are no characters to disagree.
    pub fn attempt(self, grid: &Grid, row: usize, column: usize, word: &[char]) -> Attempt {
        if !self.fits(row, column, word.len()) {
            return Attempt::OutOfBounds;
        }
        let aligned = word.iter().enumerate().all(|(offset, &ch)| {
            let (r, c) = self.step(row, column, offset);
            grid.cell(r, c) == ch
        });
        if aligned {
            Attempt::Match
        } else {
            Attempt::Mismatch
        }
    }
}

/// Outcome of [`Direction::attempt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// The word would run off the edge of the grid.
    OutOfBounds,
    /// The word fits but differs from the grid somewhere.
    Mismatch,
    /// Every character of the word matches the grid.
    Match,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}
