use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification flags attached to a vocabulary entry during assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFlags {
    pub noise_word: bool,
    pub noise_character: bool,
}

impl WordFlags {
    pub const NONE: WordFlags = WordFlags {
        noise_word: false,
        noise_character: false,
    };

    pub fn is_noise(self) -> bool {
        self.noise_word || self.noise_character
    }

    pub fn union(self, other: WordFlags) -> WordFlags {
        WordFlags {
            noise_word: self.noise_word || other.noise_word,
            noise_character: self.noise_character || other.noise_character,
        }
    }
}

/// A dictionary entry.
///
/// Equality and ordering only look at `text`; flags ride along. `String`
/// ordering is byte-wise UTF-8, which coincides with ordering by Unicode
/// scalar value, so binary searches over `&[char]` probes agree with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    text: String,
    #[serde(default)]
    flags: WordFlags,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: WordFlags::NONE,
        }
    }

    pub fn with_flags(text: impl Into<String>, flags: WordFlags) -> Self {
        Self {
            text: text.into(),
            flags,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn flags(&self) -> WordFlags {
        self.flags
    }

    pub fn is_noise_word(&self) -> bool {
        self.flags.noise_word
    }

    pub fn is_noise_character(&self) -> bool {
        self.flags.noise_character
    }

    pub fn is_noise(&self) -> bool {
        self.flags.is_noise()
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Compare this word against a probe slice, char by char.
    pub(crate) fn cmp_chars(&self, probe: &[char]) -> Ordering {
        self.text.chars().cmp(probe.iter().copied())
    }

    /// True if `probe` is a prefix of this word (or equal to it).
    pub(crate) fn starts_with_chars(&self, probe: &[char]) -> bool {
        let mut chars = self.text.chars();
        probe.iter().all(|&c| chars.next() == Some(c))
    }

    pub(crate) fn into_tagged(self, flags: WordFlags) -> Self {
        Self {
            text: self.text,
            flags: self.flags.union(flags),
        }
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Sort and deduplicate a word list, merging flags of duplicates.
pub fn sort_words(mut words: Vec<Word>) -> Vec<Word> {
    words.sort();
    let mut out: Vec<Word> = Vec::with_capacity(words.len());
    for w in words {
        match out.last_mut() {
            Some(last) if *last == w => last.flags = last.flags.union(w.flags),
            _ => out.push(w),
        }
    }
    out
}
