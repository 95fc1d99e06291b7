//! Token-collection strategies.
//!
//! A collector turns the lattice at the cursor into the spans to emit and
//! tells the scan how far to advance. Both strategies share the same knife.

mod max_word_length;
mod most_words;
#[cfg(test)]
mod tests;

pub use max_word_length::MaxWordLength;
pub use most_words::MostWords;

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::knife::Lattice;
use crate::token::TokenKind;

/// A token-to-be, in char indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

/// Per-stream state carried between lattice positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Char index up to which some candidate, emitted or suppressed, has
    /// already covered the input.
    pub covered_end: usize,
}

pub trait TokenCollector: Send + Sync {
    /// Push the spans to emit for `lattice` onto `out` and return how many
    /// characters to advance. Always returns at least 1.
    fn collect(&self, lattice: &Lattice, state: &mut ScanState, out: &mut VecDeque<Span>)
        -> usize;
}

/// Which collector a segmenter uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Every dictionary hit, overlapping where words overlap.
    #[default]
    MostWords,
    /// A single greedy longest-match path.
    MaxWordLength,
}

impl Mode {
    pub fn collector(self) -> &'static dyn TokenCollector {
        static MOST_WORDS: MostWords = MostWords;
        static MAX_WORD_LENGTH: MaxWordLength = MaxWordLength;
        match self {
            Mode::MostWords => &MOST_WORDS,
            Mode::MaxWordLength => &MAX_WORD_LENGTH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::MostWords => "most-words",
            Mode::MaxWordLength => "max-word-length",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown segmentation mode: {0} (expected most-words or max-word-length)")]
pub struct UnknownMode(String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most-words" => Ok(Mode::MostWords),
            "max-word-length" => Ok(Mode::MaxWordLength),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}
