// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deduplicated candidate words.

use std::collections::HashSet;

/// A candidate word, kept both as text (for reporting) and as chars (for matching).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    chars: Vec<char>,
}

impl Candidate {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// The distinct words of a word stream, in order of first occurrence.
///
/// Each distinct word is tested once per cell and direction, so a word that
/// appears several times in the stream is never counted more than once per
/// occurrence in the grid. The index of a word in this list is its candidate
/// index, the last component of the scan order.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    words: Vec<Candidate>,
}

impl Candidates {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .filter(|w| seen.insert(w.as_ref().to_owned()))
            .map(|w| Candidate {
                text: w.as_ref().to_owned(),
                chars: w.as_ref().chars().collect(),
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The candidate with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> &Candidate {
        &self.words[index]
    }

    /// Index of `word`, if it is a candidate.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|c| c.text == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let candidates = Candidates::new(["OK", "COOL", "OK", "COOL", "HOT"]);
        let texts: Vec<&str> = candidates.iter().map(Candidate::text).collect();
        assert_eq!(texts, vec!["OK", "COOL", "HOT"]);
        assert_eq!(candidates.position("HOT"), Some(2));
        assert_eq!(candidates.position("WARM"), None);
    }

    #[test]
    fn test_empty_stream() {
        let none: Vec<String> = Vec::new();
        let candidates = Candidates::new(none);
        assert!(candidates.is_empty());
        assert_eq!(candidates.len(), 0);
    }

    #[test]
    fn test_chars_are_unicode_scalars() {
        let candidates = Candidates::new(["né"]);
        assert_eq!(candidates.get(0).chars(), &['n', 'é']);
        assert_eq!(candidates.get(0).text(), "né");
    }

    #[test]
    fn test_case_sensitive() {
        let candidates = Candidates::new(["ok", "OK"]);
        assert_eq!(candidates.len(), 2);
    }
}
