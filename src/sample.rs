// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Built-in sample data used by the `wordfind` binary and the tests.
//!
//! The grid is five hand-written rows followed by filler rows. With
//! [`WORDS`], "chill" occurs 3 times, "notInResults" once, and every other
//! word twice.

use crate::grid::constants::{FILLER, GRID_SIDE};

/// The hand-written top rows of the sample grid.
pub const PATTERN: [&str; 5] = [
    "||||||chill|||||t|||||notInResults|okok|||||c||k||||||||w|||||||",
    "|||||chill||||||r||||||cold|t||||w||||||||||o||n|||||||wine||||c",
    "||||||i|||||||||e|||||||||||e|||wind||||||||l||i||||||||n||||||o",
    "|||apple||||||||e|tree||||||s||||n||||||||||d||f||||apple||||||o",
    "||||||l||||||||||||||||||test||||d|||||||||knife||||||||||||cool",
];

/// The sample word stream.
pub const WORDS: [&str; 11] = [
    "chill",
    "cold",
    "wind",
    "wine",
    "apple",
    "tree",
    "knife",
    "test",
    "ok",
    "cool",
    "notInResults",
];

/// `pattern` followed by filler rows, `GRID_SIDE` rows in total.
///
/// Rows of `pattern` are passed through unchanged, so a malformed pattern
/// still produces a malformed grid.
pub fn padded_rows(pattern: &[&str]) -> Vec<String> {
    let filler = FILLER.to_string().repeat(GRID_SIDE);
    pattern
        .iter()
        .map(|row| (*row).to_owned())
        .chain(std::iter::repeat(filler))
        .take(GRID_SIDE.max(pattern.len()))
        .collect()
}

/// The full sample grid, row by row.
pub fn grid_rows() -> Vec<String> {
    padded_rows(&PATTERN)
}
