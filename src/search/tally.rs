// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Aggregating match events into per-word counts, and ranking them.
//!
//! # Tie-break
//!
//! Words are ranked by descending count. Words with equal counts keep the
//! order in which they first matched during the scan. Scan order is:
//! cell row-major, then direction ([`Direction::iter`] order), then
//! candidate index. [`MatchEvent`]'s derived `Ord` is exactly that order, so
//! the first event for each word is simply the smallest one seen.
//!
//! Keeping the smallest event instead of relying on insertion order means two
//! tallies built over disjoint parts of the grid can be merged and still rank
//! exactly as a single sequential scan would.

use crate::grid::Direction;
use std::cmp::Reverse;

/// One successful alignment of a candidate word with the grid.
///
/// Field order matters: the derived `Ord` is the scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchEvent {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub candidate: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    count: usize,
    first: MatchEvent,
}

/// Occurrence counts indexed by candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<Option<Entry>>,
}

impl Tally {
    /// An empty tally for `candidates` distinct words.
    pub fn new(candidates: usize) -> Self {
        Self {
            entries: vec![None; candidates],
        }
    }

    /// Fold one match event into the counts.
    pub fn record(&mut self, event: MatchEvent) {
        let entry = self.entries[event.candidate].get_or_insert(Entry {
            count: 0,
            first: event,
        });
        entry.count += 1;
        entry.first = entry.first.min(event);
    }

    /// Combine a tally built over another part of the grid into this one.
    ///
    /// # Panics
    ///
    /// Panics if the two tallies were built for different numbers of candidates.
    pub fn merge(&mut self, other: &Tally) {
        assert_eq!(
            self.entries.len(),
            other.entries.len(),
            "cannot merge tallies over different candidate lists"
        );
        for (mine, theirs) in self.entries.iter_mut().zip(&other.entries) {
            *mine = match (*mine, *theirs) {
                (Some(a), Some(b)) => Some(Entry {
                    count: a.count + b.count,
                    first: a.first.min(b.first),
                }),
                (a, None) => a,
                (None, b) => b,
            };
        }
    }

    /// Number of occurrences of the candidate with this index.
    pub fn count(&self, candidate: usize) -> usize {
        self.entries
            .get(candidate)
            .copied()
            .flatten()
            .map_or(0, |e| e.count)
    }

    /// The first match of the candidate with this index, in scan order.
    pub fn first_match(&self, candidate: usize) -> Option<MatchEvent> {
        self.entries.get(candidate).copied().flatten().map(|e| e.first)
    }

    /// Total number of match events across all candidates.
    pub fn total(&self) -> usize {
        self.entries.iter().flatten().map(|e| e.count).sum()
    }

    /// Candidate indices that matched at least once, in first-match order.
    pub fn matched(&self) -> Vec<usize> {
        let mut matched: Vec<(usize, MatchEvent)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (i, e.first)))
            .collect();
        matched.sort_by_key(|&(_, first)| first);
        matched.into_iter().map(|(i, _)| i).collect()
    }

    /// At most `limit` candidate indices, most frequent first.
    ///
    /// Candidates that never matched are left out.
    pub fn ranked(&self, limit: usize) -> Vec<usize> {
        let mut ranked: Vec<(usize, Entry)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (i, e)))
            .collect();
        ranked.sort_by_key(|&(_, e)| (Reverse(e.count), e.first));
        ranked.truncate(limit);
        ranked.into_iter().map(|(i, _)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(row: usize, column: usize, direction: Direction, candidate: usize) -> MatchEvent {
        MatchEvent {
            row,
            column,
            direction,
            candidate,
        }
    }

    #[test]
    fn test_event_order_is_scan_order() {
        let a = event(0, 5, Direction::Vertical, 3);
        let b = event(1, 0, Direction::Horizontal, 0);
        let c = event(1, 0, Direction::Vertical, 0);
        let d = event(1, 0, Direction::Vertical, 1);
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn test_empty_tally_ranks_nothing() {
        let tally = Tally::new(3);
        assert!(tally.ranked(10).is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.count(1), 0);
        assert_eq!(tally.count(99), 0);
    }

    #[test]
    fn test_descending_count() {
        let mut tally = Tally::new(2);
        tally.record(event(0, 0, Direction::Horizontal, 0));
        tally.record(event(0, 1, Direction::Horizontal, 1));
        tally.record(event(0, 2, Direction::Horizontal, 1));
        assert_eq!(tally.ranked(10), vec![1, 0]);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_ties_keep_first_match_order() {
        let mut tally = Tally::new(3);
        // Candidate 2 matches first, then 0; candidate 1 never matches.
        tally.record(event(0, 3, Direction::Vertical, 2));
        tally.record(event(4, 0, Direction::Horizontal, 0));
        tally.record(event(9, 9, Direction::Horizontal, 2));
        tally.record(event(9, 9, Direction::Vertical, 0));
        assert_eq!(tally.ranked(10), vec![2, 0]);
        assert_eq!(tally.matched(), vec![2, 0]);
    }

    #[test]
    fn test_limit() {
        let mut tally = Tally::new(5);
        for candidate in 0..5 {
            tally.record(event(candidate, 0, Direction::Horizontal, candidate));
        }
        assert_eq!(tally.ranked(3), vec![0, 1, 2]);
        assert!(tally.ranked(0).is_empty());
    }

    #[test]
    fn test_merge_matches_single_tally() {
        let events = [
            event(0, 0, Direction::Horizontal, 1),
            event(2, 1, Direction::Vertical, 0),
            event(3, 1, Direction::Horizontal, 0),
            event(5, 7, Direction::Horizontal, 1),
            event(6, 7, Direction::Vertical, 2),
        ];

        let mut whole = Tally::new(3);
        events.iter().for_each(|&e| whole.record(e));

        // Split out of order, as parallel workers would finish.
        let mut late = Tally::new(3);
        events[3..].iter().for_each(|&e| late.record(e));
        let mut early = Tally::new(3);
        events[..3].iter().for_each(|&e| early.record(e));
        late.merge(&early);

        assert_eq!(late, whole);
        assert_eq!(late.ranked(10), vec![1, 0, 2]);
        assert_eq!(late.first_match(1), Some(events[0]));
    }

    #[test]
    #[should_panic(expected = "different candidate lists")]
    fn test_merge_size_mismatch() {
        let mut a = Tally::new(1);
        a.merge(&Tally::new(2));
    }
}
