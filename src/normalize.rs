//! Turning raw dictionary lines and puzzle input into lowercase words.

use crate::letters::{Histogram, Signature};

/// Why a dictionary line was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Nothing left, either an empty line or an annotation with no word before it
    Empty,
    /// Starts with an uppercase letter
    ProperNoun,
    /// Starts with a digit
    Numeral,
    /// Contains something other than a-z after lowercasing
    NonAlphabetic,
}

/// Normalize one dictionary line into a candidate word.
///
/// Lines starting with an uppercase letter or digit are proper nouns and
/// numerals. Anything from the first `'` or `/` onward is an inflection or
/// pronunciation annotation and is dropped. The rest is lowercased and must be
/// purely alphabetic.
pub fn normalize_line(line: &str) -> Result<String, Rejection> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let first = line.chars().next().ok_or(Rejection::Empty)?;
    if first.is_uppercase() {
        return Err(Rejection::ProperNoun);
    }
    if first.is_ascii_digit() {
        return Err(Rejection::Numeral);
    }

    let word = match line.find(|c: char| c == '\'' || c == '/') {
        Some(pos) => &line[..pos],
        None => line,
    };
    if word.is_empty() {
        return Err(Rejection::Empty);
    }

    let word = word.to_lowercase();
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Rejection::NonAlphabetic);
    }
    Ok(word)
}

/// The letters available to build words from.
///
/// Input containing anything other than letters is ineligible, the same as a
/// dictionary line would be: it keeps an empty signature and histogram, so no
/// word can match it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    letters: String,
    histogram: Histogram,
    signature: Signature,
    eligible: bool,
}

impl Tokens {
    /// Parse the puzzle letters, case-insensitively.
    pub fn parse(input: &str) -> Self {
        let letters = input.to_lowercase();
        match Histogram::of(&letters) {
            Some(histogram) => Self {
                signature: histogram.signature(),
                histogram,
                letters,
                eligible: true,
            },
            None => Self {
                letters,
                histogram: Histogram::default(),
                signature: Signature::EMPTY,
                eligible: false,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Number of characters given, which bounds the length of any match
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// False if the input held anything but letters.
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }
}

impl std::str::FromStr for Tokens {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
