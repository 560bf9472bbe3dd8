//! # Word Play
//!
//! Finds every dictionary word that can be spelled from a given set of letters,
//! using each letter no more often than it is available.
//!
//! Dictionary lines are normalized and kept, bucketed by length, only if every
//! letter they use appears among the tokens. Each stored word is then confirmed
//! by comparing per-letter counts.

pub mod dictionary;
pub mod error;
pub mod index;
pub mod letters;
pub mod matcher;
pub mod normalize;

pub use error::WordPlayError;
pub use index::{IndexStats, WordIndex};
pub use letters::{Histogram, Signature, ALPHABET_LEN};
pub use matcher::{solve, MatchReport, SubsetMatcher};
pub use normalize::{normalize_line, Rejection, Tokens};
