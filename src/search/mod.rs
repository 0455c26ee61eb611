// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Searching a grid for candidate words and ranking the results.
//!
//! # Algorithm
//!
//! For every cell, in row-major order, and for every [`Direction`], each
//! distinct candidate word is tried starting at that cell. Every successful
//! alignment is a [`MatchEvent`] and is folded straight into a [`Tally`].
//! Once the whole grid has been visited the tally is ranked: most frequent
//! first, ties in first-match order, at most [`MAX_RESULTS`] words.
//!
//! The work is `GRID_CELLS * 2 * W` attempts for `W` distinct words, with no
//! I/O or suspension, so the scan is done eagerly in one pass.
//!
//! # Example
//!
//! ```
//! use word_search::{sample, Grid, Searcher};
//!
//! let searcher = Searcher::new(Grid::from_rows(sample::grid_rows()).unwrap());
//! let top = searcher.find(sample::WORDS);
//! assert_eq!(top[0], "chill");
//! assert!(!top.contains(&"notInResults".to_string()));
//! ```

pub mod candidates;
#[cfg(feature = "parallel")]
mod parallel;
pub mod statistics;
pub mod tally;

pub use candidates::{Candidate, Candidates};
pub use statistics::{Counter, ScanStatistics};
pub use tally::{MatchEvent, Tally};

use crate::grid::{Attempt, Direction, Grid, GRID_SIDE, MAX_RESULTS};
use std::ops::Range;

/// Finds the most frequent candidate words in a grid.
///
/// The searcher owns its grid. Each call to [`find`](Searcher::find) or
/// [`scan`](Searcher::scan) is independent; nothing carries over between calls.
#[derive(Debug, Clone)]
pub struct Searcher {
    grid: Grid,
}

impl Searcher {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The (at most [`MAX_RESULTS`]) most frequent words of `words` in the grid.
    ///
    /// Duplicates in `words` are counted once. Words that never occur are not
    /// returned, so the result is empty when nothing matches. This never fails.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scan(words).top()
    }

    /// Scan the grid and return the full aggregate, not just the ranking.
    pub fn scan<I, S>(&self, words: I) -> Scan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = Candidates::new(words);
        let _span = tracing::debug_span!("scan", candidates = candidates.len()).entered();

        let (tally, statistics) = scan_rows(&self.grid, &candidates, 0..GRID_SIDE);
        Scan::finish(candidates, tally, statistics)
    }
}

/// Scan the rows in `rows`, every column and direction, for every candidate.
///
/// Events are produced in scan order, but [`Tally`] does not depend on that:
/// disjoint row ranges can be scanned separately and merged.
pub(crate) fn scan_rows(
    grid: &Grid,
    candidates: &Candidates,
    rows: Range<usize>,
) -> (Tally, ScanStatistics) {
    let mut tally = Tally::new(candidates.len());
    let mut statistics = ScanStatistics::new();

    for row in rows {
        for column in 0..GRID_SIDE {
            statistics.increment(Counter::CellsVisited);
            for direction in Direction::iter() {
                for (candidate, word) in candidates.iter().enumerate() {
                    statistics.increment(Counter::Attempts);
                    match direction.attempt(grid, row, column, word.chars()) {
                        Attempt::OutOfBounds => statistics.increment(Counter::OutOfBounds),
                        Attempt::Mismatch => {}
                        Attempt::Match => {
                            statistics.increment(Counter::Matches);
                            tally.record(MatchEvent {
                                row,
                                column,
                                direction,
                                candidate,
                            });
                        }
                    }
                }
            }
        }
    }
    (tally, statistics)
}

/// The result of one scan: per-word counts and scan statistics.
#[derive(Debug, Clone)]
pub struct Scan {
    candidates: Candidates,
    tally: Tally,
    statistics: ScanStatistics,
}

impl Scan {
    fn finish(candidates: Candidates, tally: Tally, statistics: ScanStatistics) -> Self {
        let scan = Self {
            candidates,
            tally,
            statistics,
        };
        tracing::debug!(
            matched = scan.tally.matched().len(),
            "scan complete: {}",
            scan.statistics
        );
        scan
    }

    /// The [`MAX_RESULTS`] most frequent words.
    pub fn top(&self) -> Vec<String> {
        self.ranked(MAX_RESULTS)
    }

    /// At most `limit` words, most frequent first, ties in first-match order.
    pub fn ranked(&self, limit: usize) -> Vec<String> {
        self.tally
            .ranked(limit)
            .into_iter()
            .map(|i| self.candidates.get(i).text().to_owned())
            .collect()
    }

    /// Number of occurrences of `word`; 0 if it never matched or was not a candidate.
    pub fn count(&self, word: &str) -> usize {
        self.candidates
            .position(word)
            .map_or(0, |i| self.tally.count(i))
    }

    /// Every word that matched, with its count, in first-match order.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.tally
            .matched()
            .into_iter()
            .map(|i| (self.candidates.get(i).text(), self.tally.count(i)))
            .collect()
    }

    /// First occurrence of `word` in scan order.
    pub fn first_match(&self, word: &str) -> Option<MatchEvent> {
        self.candidates
            .position(word)
            .and_then(|i| self.tally.first_match(i))
    }

    /// Total number of match events.
    pub fn total_matches(&self) -> usize {
        self.tally.total()
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }
}
