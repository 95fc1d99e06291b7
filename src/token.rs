//! Tokens produced by the segmenter.
//!
//! Overlapping tokens (most-words mode) are expressed the way search
//! indexes expect them: a token whose span overlaps the previous one has a
//! `position_increment` of 0 and stacks on the same position.
//!
//! ```text
//! Input: "汉文化"
//!   汉文  [0, 6)  pos_inc=1
//!   文化  [3, 9)  pos_inc=0   overlaps 汉文
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a token was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Vocabulary entry.
    Word,
    /// Surname followed by one or two given-name characters.
    Name,
    /// Combinatorics entry, typically mixed-script ("T恤").
    Combinatoric,
    /// Maximal run of Latin letters.
    Latin,
    /// Maximal run of digits.
    Numeric,
    /// Digit run fused with a following unit ("0.01μm").
    Quantity,
    /// Single CJK character with no dictionary match.
    Single,
    /// Punctuation, symbol or any other pass-through character.
    Symbol,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Byte offset of the first character in the input.
    pub start_offset: usize,

    /// Byte offset one past the last character.
    pub end_offset: usize,

    /// 0 if this token overlaps the previous one, otherwise 1.
    pub position_increment: usize,

    pub kind: TokenKind,
}

impl Token {
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    pub fn overlaps(&self, other: &Token) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}->{}",
            self.text, self.position_increment, self.start_offset, self.end_offset
        )
    }
}
