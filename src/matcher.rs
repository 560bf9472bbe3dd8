//! Exact subset matching of indexed candidates against the tokens.
//!
//! The index has already thrown out words that use a letter the tokens lack,
//! but it cannot see multiplicity: with tokens `aabc`, the word `aaab` passes
//! the signature check and still needs one `a` too many. Every candidate is
//! therefore confirmed here by comparing full letter histograms.

use std::fmt;

use crate::index::WordIndex;
use crate::letters::Histogram;
use crate::normalize::Tokens;
use rayon::prelude::*;

/// Confirmed matches, shortest words first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub words: Vec<String>,
    pub total: usize,
}

impl MatchReport {
    fn from_words(words: Vec<String>) -> Self {
        let total = words.len();
        Self { words, total }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "{}", word)?;
        }
        write!(f, "Total matches: {}", self.total)
    }
}

/// Checks candidate words against the token histogram.
#[derive(Debug, Clone)]
pub struct SubsetMatcher {
    available: Histogram,
    max_len: usize,
}

impl SubsetMatcher {
    pub fn new(tokens: &Tokens) -> Self {
        Self {
            available: *tokens.histogram(),
            max_len: tokens.len(),
        }
    }

    /// Whether a lowercase word can be spelled from the tokens.
    pub fn is_match(&self, word: &str) -> bool {
        word.len() <= self.max_len
            && Histogram::of(word).is_some_and(|h| h.fits_within(&self.available))
    }

    /// Confirm every indexed candidate, walking buckets from shortest to longest.
    pub fn find_matches(&self, index: &WordIndex) -> MatchReport {
        let words = index
            .words()
            .filter(|word| self.is_match(word))
            .map(String::from)
            .collect();
        MatchReport::from_words(words)
    }

    /// Same result and order as [`find_matches`](Self::find_matches), with the
    /// histogram checks spread across threads.
    pub fn find_matches_par(&self, index: &WordIndex) -> MatchReport {
        let candidates: Vec<&str> = index.words().collect();
        let words = candidates
            .par_iter()
            .filter(|word| self.is_match(word))
            .map(|word| word.to_string())
            .collect();
        MatchReport::from_words(words)
    }
}

/// Parse the tokens, index the dictionary lines and report every match.
pub fn solve<I, S>(tokens: &str, lines: I) -> MatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = Tokens::parse(tokens);
    let index = WordIndex::build(&tokens, lines);
    SubsetMatcher::new(&tokens).find_matches(&index)
}
