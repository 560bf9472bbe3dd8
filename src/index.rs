//! Candidate words grouped by length.
//!
//! Only words that could possibly be spelled from the tokens are stored: they
//! must be no longer than the tokens and use no letter the tokens lack. Letter
//! multiplicity is not checked here; that is the matcher's job.

use std::io;

use indexmap::IndexSet;

use crate::error::WordPlayError;
use crate::letters::Signature;
use crate::normalize::{normalize_line, Rejection, Tokens};

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub lines_read: usize,
    pub admitted: usize,
    pub duplicates: usize,
    pub empty: usize,
    pub proper_nouns: usize,
    pub numerals: usize,
    pub non_alphabetic: usize,
    pub too_long: usize,
    pub signature_misses: usize,
}

impl IndexStats {
    fn reject(&mut self, reason: Rejection) {
        match reason {
            Rejection::Empty => self.empty += 1,
            Rejection::ProperNoun => self.proper_nouns += 1,
            Rejection::Numeral => self.numerals += 1,
            Rejection::NonAlphabetic => self.non_alphabetic += 1,
        }
    }

    /// Lines that never made it into the index, duplicates included.
    pub fn excluded(&self) -> usize {
        self.lines_read - self.admitted
    }
}

/// Eligible dictionary words bucketed by length, `1..=tokens.len()`.
#[derive(Debug, Clone)]
pub struct WordIndex {
    /// Words of one length, unique, in first-seen order
    buckets: Vec<IndexSet<String>>,
    token_signature: Signature,
    stats: IndexStats,
}

impl WordIndex {
    /// An index with no words, sized for the given tokens.
    pub fn new(tokens: &Tokens) -> Self {
        Self {
            buckets: vec![IndexSet::new(); tokens.len() + 1],
            token_signature: tokens.signature(),
            stats: IndexStats::default(),
        }
    }

    /// Build an index from dictionary lines.
    pub fn build<I, S>(tokens: &Tokens, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new(tokens);
        for line in lines {
            index.insert_line(line.as_ref());
        }
        index
    }

    /// Build an index from a fallible line source, stopping at the first read error.
    pub fn try_build<I>(tokens: &Tokens, lines: I) -> Result<Self, WordPlayError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut index = Self::new(tokens);
        for line in lines {
            index.insert_line(&line?);
        }
        Ok(index)
    }

    /// Offer one raw dictionary line. Returns true if it was stored.
    pub fn insert_line(&mut self, line: &str) -> bool {
        self.stats.lines_read += 1;

        let word = match normalize_line(line) {
            Ok(word) => word,
            Err(reason) => {
                self.stats.reject(reason);
                return false;
            }
        };

        let len = word.len();
        if len > self.max_len() {
            self.stats.too_long += 1;
            return false;
        }

        // normalize_line only yields non-empty a-z words
        let admissible = Signature::of(&word)
            .is_some_and(|sig| !sig.is_empty() && sig.is_subset_of(self.token_signature));
        if !admissible {
            self.stats.signature_misses += 1;
            return false;
        }

        if self.buckets[len].insert(word) {
            self.stats.admitted += 1;
            true
        } else {
            self.stats.duplicates += 1;
            false
        }
    }

    /// Words of exactly `len` letters, in first-seen order.
    pub fn bucket(&self, len: usize) -> impl Iterator<Item = &str> + '_ {
        self.buckets.get(len).into_iter().flatten().map(String::as_str)
    }

    /// Buckets from length 1 up to `max_len`.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &IndexSet<String>)> + '_ {
        self.buckets.iter().enumerate().skip(1)
    }

    /// Every stored word, shortest first.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().flatten().map(String::as_str)
    }

    /// Longest word length the index accepts
    pub fn max_len(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Number of unique words stored
    pub fn len(&self) -> usize {
        self.stats.admitted
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}
