//! Per-letter primitives over the lowercase ASCII alphabet.
//!
//! A word is described two ways: a [`Histogram`] counting every letter, and a
//! [`Signature`] bitmask recording only which letters appear. The signature is
//! cheap to compare and is used to reject candidates early; the histogram is
//! what actually decides a match.

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Map a byte to its letter slot, `a` -> 0 through `z` -> 25.
#[inline]
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some((byte - b'a') as usize)
    } else {
        None
    }
}

/// Bitmask with bit `i` set iff letter `i` occurs at least once.
/// Bits 26..32 are never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature(u32);

impl Signature {
    pub const EMPTY: Self = Self(0);

    /// Signature of a lowercase word, or `None` if any byte is not `a..=z`.
    pub fn of(word: &str) -> Option<Self> {
        let mut bits = 0u32;
        for byte in word.bytes() {
            bits |= 1 << letter_index(byte)?;
        }
        Some(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, letter: usize) -> bool {
        letter < ALPHABET_LEN && self.0 & (1 << letter) != 0
    }

    /// True if every letter present here is also present in `other`.
    #[inline]
    pub fn is_subset_of(self, other: Signature) -> bool {
        self.0 & !other.0 == 0
    }
}

/// Exact occurrence count of each letter in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Histogram {
    counts: [u32; ALPHABET_LEN],
}

impl Histogram {
    /// Histogram of a lowercase word, or `None` if any byte is not `a..=z`.
    pub fn of(word: &str) -> Option<Self> {
        let mut counts = [0u32; ALPHABET_LEN];
        for byte in word.bytes() {
            counts[letter_index(byte)?] += 1;
        }
        Some(Self { counts })
    }

    pub fn count(&self, letter: usize) -> u32 {
        self.counts.get(letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Presence bitmask derived from the nonzero slots.
    pub fn signature(&self) -> Signature {
        let bits = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .fold(0u32, |bits, (i, _)| bits | 1 << i);
        Signature(bits)
    }

    /// True if no letter occurs more often here than in `available`.
    #[inline]
    pub fn fits_within(&self, available: &Histogram) -> bool {
        self.counts
            .iter()
            .zip(available.counts.iter())
            .all(|(need, have)| need <= have)
    }
}
