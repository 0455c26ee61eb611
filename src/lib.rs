// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Find the most frequent candidate words in a fixed-size character grid.
//!
//! Given a 64x64 grid of characters and a stream of candidate words, the
//! [`Searcher`] counts how often each distinct word occurs as a contiguous
//! run of grid characters, reading left to right along rows or top to bottom
//! down columns, and returns the ten most frequent.
//!
//! # Architecture
//!
//! ## Grid
//!
//! [`Grid`] validates its rows once at construction (exactly 64 rows of
//! exactly 64 characters) and stores them in a fixed array. After that the
//! shape is guaranteed by the type; there is no way to get a differently
//! sized grid.
//!
//! ## Scan
//!
//! [`Searcher::find`] visits every cell row-major, tries both
//! [`Direction`]s from it, and tries every distinct candidate word in each
//! direction. Words never wrap at the grid edge and are never read
//! backwards or diagonally.
//!
//! ## Ranking
//!
//! Match events are folded into a per-word [`Tally`]. The ranking orders
//! words by descending count; ties keep the order in which the words first
//! matched during the scan. Words that never matched are left out, and at
//! most [`MAX_RESULTS`] words are returned.
//!
//! # Parallelization
//!
//! With the `parallel` feature (on by default), [`Searcher::find_parallel`]
//! scans rows on the rayon thread pool. Partial tallies keep each word's
//! earliest match event, so the merged ranking is identical to the
//! sequential one, tie-break included.
//!
//! # Example
//!
//! ```
//! use word_search::{sample, Grid, Searcher};
//!
//! let grid = Grid::from_rows(sample::padded_rows(&[
//!     "O|||||||||||||||||OK||||||||||||||||||||||||CC||||||||||||||||||",
//!     "K|||||||C||||||||OK||||||||||||||||||||||||COOL|||||||||||||||||",
//!     "||||||||O|||||||||||||||||||||||||||||||||||OO|||||||||||||||||O",
//!     "||||||COOL|||||||||||||||||||||||||||||||COOLL||||||||||||||||||",
//!     "COOL||||L|||||||||||||||||||||||||||||||||KK|||||||||||||||||COO",
//! ]))?;
//!
//! let searcher = Searcher::new(grid);
//! assert_eq!(searcher.find(["OK", "OK", "COOL"]), vec!["COOL", "OK"]);
//! # Ok::<(), word_search::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod sample;
pub mod search;

// Re-export commonly used types
pub use error::{GridError, Result};
pub use grid::{Attempt, Direction, Grid, GRID_SIDE, MAX_RESULTS};
pub use search::{MatchEvent, Scan, Searcher, Tally};
