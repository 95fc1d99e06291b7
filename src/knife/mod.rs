//! The scanning engine.
//!
//! A [`Knife`] looks at one cursor position of a character buffer and
//! reports every word that could start there as a [`Lattice`]. It never
//! decides which candidates survive; that is the collector's job.

mod lattice;

pub use lattice::{Candidate, Lattice};

use std::sync::Arc;

use tracing::debug;

use crate::dict::{Dictionaries, Dictionary};
use crate::token::TokenKind;
use crate::unicode::{is_cjk, run_len, CharClass};

/// Given names following a surname are one or two characters long.
const MAX_GIVEN_NAME: usize = 2;

pub struct Knife {
    dicts: Arc<Dictionaries>,
    /// Longest candidate produced by dictionary probing. 0 = unlimited.
    max_word_length: usize,
}

impl Knife {
    pub fn new(dicts: Arc<Dictionaries>) -> Self {
        Self {
            dicts,
            max_word_length: 0,
        }
    }

    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dicts
    }

    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Build the lattice at `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is out of bounds for `chars`.
    pub fn lattice_at(&self, chars: &[char], cursor: usize) -> Lattice {
        let class = CharClass::of(chars[cursor]);
        let mut candidates = Vec::new();
        let mut step = 1;
        let mut fallback_noise = false;

        match class {
            CharClass::Whitespace => {}
            CharClass::Cjk => {
                let dicts = &*self.dicts;
                self.probe(dicts.vocabulary(), TokenKind::Word, chars, cursor, &mut candidates);
                self.probe(
                    dicts.combinatorics(),
                    TokenKind::Combinatoric,
                    chars,
                    cursor,
                    &mut candidates,
                );
                self.names(chars, cursor, &mut candidates);
                fallback_noise = self.is_noise_character(chars, cursor);
            }
            CharClass::Latin => {
                step = run_len(chars, cursor);
                candidates.push(Candidate::new(step, TokenKind::Latin));
                self.probe(
                    self.dicts.combinatorics(),
                    TokenKind::Combinatoric,
                    chars,
                    cursor,
                    &mut candidates,
                );
            }
            CharClass::Digit => {
                let digits = run_len(chars, cursor);
                let candidate = match self.unit_after(chars, cursor + digits) {
                    Some(unit) => Candidate::new(digits + unit, TokenKind::Quantity),
                    None => Candidate::new(digits, TokenKind::Numeric),
                };
                step = candidate.len;
                candidates.push(candidate);
            }
            CharClass::Other => {
                let noise = self.is_noise_character(chars, cursor);
                candidates.push(Candidate::new(1, TokenKind::Symbol).noisy(noise));
            }
        }

        lattice::normalize(&mut candidates);
        debug!(cursor, ?class, candidates = candidates.len(), "lattice");
        Lattice {
            start: cursor,
            class,
            candidates,
            step,
            fallback_noise,
        }
    }

    /// Upper bound on probe length at a position with `remaining` chars left.
    fn limit(&self, remaining: usize) -> usize {
        if self.max_word_length == 0 {
            remaining
        } else {
            remaining.min(self.max_word_length)
        }
    }

    /// Probe `dict` at growing lengths, stopping once nothing longer can match.
    fn probe(
        &self,
        dict: &dyn Dictionary,
        kind: TokenKind,
        chars: &[char],
        start: usize,
        out: &mut Vec<Candidate>,
    ) {
        for len in 1..=self.limit(chars.len() - start) {
            let hit = dict.search(chars, start, len);
            if let Some(word) = hit.word() {
                out.push(Candidate::new(len, kind).noisy(word.is_noise()));
            }
            if !hit.is_prefix() {
                break;
            }
        }
    }

    /// Surname-led personal names.
    ///
    /// For each surname matching at `start`, one and two character given
    /// names are offered as long as they are CJK, are not noise characters,
    /// and the vocabulary has no word of two or more characters starting
    /// right after the surname.
    fn names(&self, chars: &[char], start: usize, out: &mut Vec<Candidate>) {
        let surnames = self.dicts.confucian_family_names();
        if surnames.is_empty() {
            return;
        }
        let limit = self.limit(chars.len() - start);
        for surname in 1..=limit {
            let hit = surnames.search(chars, start, surname);
            if hit.is_hit() && !self.has_vocabulary_word(chars, start + surname) {
                for given in 1..=MAX_GIVEN_NAME {
                    let end = start + surname + given;
                    if end > chars.len() || surname + given > limit {
                        break;
                    }
                    if !is_cjk(chars[end - 1]) || self.is_noise_character(chars, end - 1) {
                        break;
                    }
                    out.push(Candidate::new(surname + given, TokenKind::Name));
                }
            }
            if !hit.is_prefix() {
                break;
            }
        }
    }

    /// Whether a vocabulary word of two or more characters starts at `pos`.
    fn has_vocabulary_word(&self, chars: &[char], pos: usize) -> bool {
        if pos >= chars.len() {
            return false;
        }
        let vocabulary = self.dicts.vocabulary();
        for len in 1..=self.limit(chars.len() - pos) {
            let hit = vocabulary.search(chars, pos, len);
            if len >= 2 && hit.is_hit() {
                return true;
            }
            if !hit.is_prefix() {
                break;
            }
        }
        false
    }

    /// Length of the longest unit starting at `pos`, if any.
    fn unit_after(&self, chars: &[char], pos: usize) -> Option<usize> {
        let units = self.dicts.units();
        let mut longest = None;
        for len in 1..=chars.len().saturating_sub(pos) {
            let hit = units.search(chars, pos, len);
            if hit.is_hit() {
                longest = Some(len);
            }
            if !hit.is_prefix() {
                break;
            }
        }
        longest
    }

    fn is_noise_character(&self, chars: &[char], pos: usize) -> bool {
        self.dicts.noise_characters().search(chars, pos, 1).is_hit()
    }
}
