// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row-parallel scanning.
//!
//! Each row is scanned by a rayon worker into its own [`Tally`], and the
//! partial tallies are merged. The grid and candidate list are only read.
//! Because a tally keeps the earliest match event per word rather than an
//! insertion order, the merged ranking is identical to the sequential one,
//! ties included.

use super::{scan_rows, Candidates, Scan, ScanStatistics, Searcher, Tally};
use crate::grid::{GRID_SIDE, MAX_RESULTS};
use rayon::prelude::*;

impl Searcher {
    /// Same result as [`find`](Searcher::find), scanning rows on the rayon pool.
    pub fn find_parallel<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scan_parallel(words).ranked(MAX_RESULTS)
    }

    /// Same result as [`scan`](Searcher::scan), scanning rows on the rayon pool.
    pub fn scan_parallel<I, S>(&self, words: I) -> Scan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = Candidates::new(words);
        let _span =
            tracing::debug_span!("scan_parallel", candidates = candidates.len()).entered();

        let grid = &self.grid;
        let (tally, statistics) = (0..GRID_SIDE)
            .into_par_iter()
            .map(|row| scan_rows(grid, &candidates, row..row + 1))
            .reduce(
                || (Tally::new(candidates.len()), ScanStatistics::new()),
                |(mut tally, mut statistics), (other_tally, other_statistics)| {
                    tally.merge(&other_tally);
                    statistics.merge(&other_statistics);
                    (tally, statistics)
                },
            );
        Scan::finish(candidates, tally, statistics)
    }
}
