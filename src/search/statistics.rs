// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters describing the work done by one scan. They are collected alongside
//! the match tally and merged the same way when the scan is split over workers.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counter {
    /// Grid cells used as a starting position.
    CellsVisited,
    /// (cell, direction, candidate) combinations considered.
    Attempts,
    /// Attempts skipped because the word would run off the grid.
    OutOfBounds,
    /// Match events recorded.
    Matches,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStatistics {
    stats: [u64; Counter::COUNT],
}

impl ScanStatistics {
    pub fn new() -> Self {
        ScanStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// Add another set of counters into this one.
    pub fn merge(&mut self, other: &ScanStatistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for ScanStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells, {} attempts ({} out of bounds), {} matches",
            self.get(Counter::CellsVisited),
            self.get(Counter::Attempts),
            self.get(Counter::OutOfBounds),
            self.get(Counter::Matches)
        )
    }
}
