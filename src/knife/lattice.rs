use crate::token::TokenKind;
use crate::unicode::CharClass;

/// One way to cut a word starting at the lattice position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Length in characters.
    pub len: usize,
    pub kind: TokenKind,
    /// Tagged as a noise word or noise character.
    pub noise: bool,
}

impl Candidate {
    pub fn new(len: usize, kind: TokenKind) -> Self {
        Self {
            len,
            kind,
            noise: false,
        }
    }

    pub fn noisy(mut self, noise: bool) -> Self {
        self.noise = noise;
        self
    }
}

/// Every candidate the knife found at one cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    /// Char index of the cursor.
    pub start: usize,
    pub class: CharClass,
    /// Distinct lengths, ascending.
    pub candidates: Vec<Candidate>,
    /// How far a recall-oriented scan moves on: the whole run for Latin and
    /// digit runs, one character otherwise.
    pub step: usize,
    /// Whether the single-character fallback is a noise character.
    pub fallback_noise: bool,
}

impl Lattice {
    /// Whitespace: nothing to emit here.
    pub fn is_separator(&self) -> bool {
        self.class == CharClass::Whitespace
    }

    /// No candidate at all; only happens at CJK positions.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn longest(&self) -> Option<&Candidate> {
        self.candidates.last()
    }

    pub fn fallback(&self) -> Candidate {
        Candidate::new(1, TokenKind::Single).noisy(self.fallback_noise)
    }

    /// End index (exclusive) of `candidate`.
    pub fn end_of(&self, candidate: &Candidate) -> usize {
        self.start + candidate.len
    }
}

/// Sort candidates by length and keep the first of each length.
///
/// Candidates are pushed in priority order (vocabulary or run first, then
/// combinatorics, then names), and the sort is stable.
pub(super) fn normalize(candidates: &mut Vec<Candidate>) {
    candidates.sort_by_key(|c| c.len);
    candidates.dedup_by_key(|c| c.len);
}
