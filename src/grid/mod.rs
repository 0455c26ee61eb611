// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The character grid being searched.
//!
//! A [`Grid`] is validated once, at construction, and is immutable after
//! that. Storage is a fixed `GRID_SIDE` x `GRID_SIDE` array, so a `Grid`
//! value is always the right shape and cell access needs no further checks.
//!
//! # Indexing
//!
//! Cells are addressed as `(row, column)`: the first index is the position
//! of the row in the input sequence, the second is the character offset
//! within that row. [`Direction::Horizontal`] moves along the second index,
//! [`Direction::Vertical`] along the first.
//!
//! # Example
//!
//! ```
//! use word_search::grid::{Grid, GRID_SIDE};
//!
//! let row = "A".repeat(GRID_SIDE);
//! let grid = Grid::from_rows(std::iter::repeat(row).take(GRID_SIDE)).unwrap();
//! assert_eq!(grid.cell(0, 63), 'A');
//!
//! assert!(Grid::from_rows(["too", "small"]).is_err());
//! ```

pub mod constants;
pub mod direction;

pub use constants::*;
pub use direction::{Attempt, Direction};

use crate::error::{GridError, Result};
use std::fmt;
use std::str::FromStr;

type Cells = [[char; GRID_SIDE]; GRID_SIDE];

/// A validated, immutable `GRID_SIDE` x `GRID_SIDE` grid of characters.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<Cells>,
}

impl Grid {
    /// Build a grid from exactly `GRID_SIDE` rows of exactly `GRID_SIDE` characters.
    ///
    /// Lengths are counted in `char`s. Fails with [`GridError::RowCount`] if
    /// the number of rows is wrong, or [`GridError::RowLength`] for the first
    /// row (empty or otherwise) whose length is wrong. Nothing is returned on
    /// failure; there is no partially built grid.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<S> = rows.into_iter().collect();
        if rows.len() != GRID_SIDE {
            return Err(GridError::RowCount { found: rows.len() });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .enumerate()
            .find(|&(_, len)| len != GRID_SIDE)
        {
            return Err(GridError::RowLength { row, found });
        }

        let mut cells: Box<Cells> = Box::new([['\0'; GRID_SIDE]; GRID_SIDE]);
        for (target, source) in cells.iter_mut().zip(&rows) {
            for (cell, ch) in target.iter_mut().zip(source.as_ref().chars()) {
                *cell = ch;
            }
        }
        Ok(Self { cells })
    }

    /// The character at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= GRID_SIDE`.
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> char {
        self.cells[row][column]
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> &[char; GRID_SIDE] {
        &self.cells[row]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char; GRID_SIDE]> + '_ {
        self.cells.iter()
    }

    /// Side length (always `GRID_SIDE`).
    pub const fn side(&self) -> usize {
        GRID_SIDE
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &ch in row {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 4096 characters is too much noise for a debug dump.
        let first: String = self.cells[0].iter().collect();
        f.debug_struct("Grid")
            .field("side", &GRID_SIDE)
            .field("first_row", &first)
            .finish()
    }
}

/// Parse newline-separated rows.
///
/// `\r\n` line endings and a single trailing newline are accepted.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let body = s.strip_suffix('\n').unwrap_or(s);
        let body = body.strip_suffix('\r').unwrap_or(body);
        Self::from_rows(body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)))
    }
}
