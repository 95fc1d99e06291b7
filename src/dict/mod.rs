//! Dictionary storage and loading.
//!
//! `SortedDictionary` keeps entries in one sorted array; `BucketedDictionary`
//! partitions them by leading character first. Both answer the same
//! `search` probe so the knife never cares which one it holds.
//! `Dictionaries` bundles the six named dictionaries a segmenter needs.

mod bucketed;
pub mod compiled;
pub mod registry;
mod set;
pub mod source;
mod sorted;
#[cfg(test)]
mod tests;
mod word;

pub use bucketed::BucketedDictionary;
pub use registry::DictionaryRegistry;
pub use set::{DictionaryConfig, DictionaryFormat, Dictionaries, VOCABULARY};
pub use sorted::SortedDictionary;
pub use word::{sort_words, Word, WordFlags};

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Dictionaries with at least this many entries get the bucketed backend.
pub const BUCKET_THRESHOLD: usize = 1024;

/// Unified error type for dictionary loading and the compiled (KNDX) format.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary home {} does not exist or is not a directory", .0.display())]
    MissingHome(PathBuf),

    #[error("no dictionary files found under {}; is the dictionary home set correctly?", .0.display())]
    NoDictionaryFiles(PathBuf),

    #[error("unsupported charset: {0} (only UTF-8 is supported)")]
    UnsupportedCharset(String),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected KNDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("truncated body: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("checksum mismatch (expected {expected:#010x}, computed {actual:#010x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl DictError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DictError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Outcome of probing a buffer slice against a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    entry: Option<(usize, &'a Word)>,
    prefix: bool,
}

impl<'a> Hit<'a> {
    pub(crate) fn new(entry: Option<(usize, &'a Word)>, prefix: bool) -> Self {
        Self { entry, prefix }
    }

    /// The probed slice equals a dictionary entry.
    pub fn is_hit(&self) -> bool {
        self.entry.is_some()
    }

    /// The probed slice is a proper prefix of at least one longer entry.
    pub fn is_prefix(&self) -> bool {
        self.prefix
    }

    /// Neither a hit nor a prefix: no entry can continue from here.
    pub fn is_undefined(&self) -> bool {
        self.entry.is_none() && !self.prefix
    }

    pub fn word(&self) -> Option<&'a Word> {
        self.entry.map(|(_, w)| w)
    }

    /// Index of the matched entry in the dictionary's global sort order.
    pub fn index(&self) -> Option<usize> {
        self.entry.map(|(i, _)| i)
    }
}

pub trait Dictionary: Send + Sync {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Word>;

    /// Probe `buffer[offset..offset + length]`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds for `buffer`.
    fn search(&self, buffer: &[char], offset: usize, length: usize) -> Hit<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact lookup of a whole string.
    fn lookup(&self, text: &str) -> Option<&Word> {
        let chars: Vec<char> = text.chars().collect();
        self.search(&chars, 0, chars.len()).word()
    }

    fn words(&self) -> Box<dyn Iterator<Item = &Word> + '_> {
        Box::new((0..self.len()).filter_map(move |i| self.get(i)))
    }
}

/// Build a dictionary from sorted, deduplicated words, choosing the backend
/// by size.
pub fn build(words: Vec<Word>) -> Arc<dyn Dictionary> {
    if words.len() >= BUCKET_THRESHOLD {
        Arc::new(BucketedDictionary::new(words))
    } else {
        Arc::new(SortedDictionary::new(words))
    }
}

/// An empty dictionary.
pub fn empty() -> Arc<dyn Dictionary> {
    Arc::new(SortedDictionary::new(Vec::new()))
}
