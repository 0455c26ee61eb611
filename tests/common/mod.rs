// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use word_search::grid::GRID_CELLS;
use word_search::{sample, Grid, GRID_SIDE};

/// A 64x64 grid with every cell set to `ch`.
pub fn uniform_rows(ch: char) -> Vec<String> {
    vec![ch.to_string().repeat(GRID_SIDE); GRID_SIDE]
}

pub fn uniform_grid(ch: char) -> Grid {
    Grid::from_rows(uniform_rows(ch)).expect("uniform grid is 64x64")
}

/// The literal rows followed by filler rows.
pub fn padded_grid(pattern: &[&str]) -> Grid {
    Grid::from_rows(sample::padded_rows(pattern)).expect("padded grid is 64x64")
}

/// Pattern where "OK" occurs 6 times and "COOL" 7 times.
pub const OK_COOL_PATTERN: [&str; 5] = [
    "O|||||||||||||||||OK||||||||||||||||||||||||CC||||||||||||||||||",
    "K|||||||C||||||||OK||||||||||||||||||||||||COOL|||||||||||||||||",
    "||||||||O|||||||||||||||||||||||||||||||||||OO|||||||||||||||||O",
    "||||||COOL|||||||||||||||||||||||||||||||COOLL||||||||||||||||||",
    "COOL||||L|||||||||||||||||||||||||||||||||KK|||||||||||||||||COO",
];

/// Count occurrences of `word` by brute force: every window of every row,
/// read left to right, and of every column, read top to bottom.
///
/// The empty word occurs once per cell in each direction.
pub fn oracle_count(grid: &Grid, word: &str) -> usize {
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return GRID_CELLS * 2;
    }
    if word.len() > GRID_SIDE {
        return 0;
    }
    let rows: Vec<Vec<char>> = grid.rows().map(|r| r.to_vec()).collect();
    let columns: Vec<Vec<char>> = (0..GRID_SIDE)
        .map(|c| (0..GRID_SIDE).map(|r| grid.cell(r, c)).collect())
        .collect();
    rows.iter()
        .chain(columns.iter())
        .map(|line| line.windows(word.len()).filter(|w| *w == &word[..]).count())
        .sum()
}
