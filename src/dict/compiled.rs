//! Binary word-list format (`*.dic.compiled`).
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! magic "KNDX" | version u8 | word_count u32 | crc32 u32 | body_len u32 | body
//! ```
//!
//! The body is the bincode-encoded, sorted `Vec<Word>` (text plus flags), so
//! a compiled vocabulary keeps the noise tags it was compiled with.

use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use super::{DictError, Word};

pub const MAGIC: &[u8; 4] = b"KNDX";
pub const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4 + 4; // magic + version + count + crc + body_len = 17

/// File suffix for compiled dictionaries.
pub const COMPILED_SUFFIX: &str = ".dic.compiled";

pub fn to_bytes(words: &[Word]) -> Result<Vec<u8>, DictError> {
    let body = bincode::serialize(words).map_err(DictError::Serialize)?;

    let count: u32 = words
        .len()
        .try_into()
        .map_err(|_| DictError::Parse("word count exceeds u32::MAX".to_string()))?;
    let body_len: u32 = body
        .len()
        .try_into()
        .map_err(|_| DictError::Parse("body exceeds u32::MAX".to_string()))?;
    let crc = crc32fast::hash(&body);

    let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
    buf.extend_from_slice(MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&count.to_le_bytes());
    buf.extend_from_slice(&crc.to_le_bytes());
    buf.extend_from_slice(&body_len.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&data[at..at + 4]);
    u32::from_le_bytes(raw)
}

/// Decode a compiled word list, dropping entries longer than
/// `max_word_length` characters (0 keeps everything).
pub fn from_bytes(data: &[u8], max_word_length: usize) -> Result<Vec<Word>, DictError> {
    if data.len() < 5 {
        return Err(DictError::InvalidHeader);
    }
    if &data[..4] != MAGIC {
        return Err(DictError::InvalidMagic);
    }
    if data[4] != VERSION {
        return Err(DictError::UnsupportedVersion(data[4]));
    }
    if data.len() < HEADER_SIZE {
        return Err(DictError::InvalidHeader);
    }

    let count = read_u32(data, 5) as usize;
    let expected_crc = read_u32(data, 9);
    let body_len = read_u32(data, 13) as usize;

    let body = &data[HEADER_SIZE..];
    if body.len() < body_len {
        return Err(DictError::Truncated {
            expected: body_len,
            found: body.len(),
        });
    }
    let body = &body[..body_len];

    let actual_crc = crc32fast::hash(body);
    if actual_crc != expected_crc {
        return Err(DictError::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    let words: Vec<Word> = bincode::deserialize(body).map_err(DictError::Deserialize)?;
    if words.len() != count {
        return Err(DictError::Parse(format!(
            "header says {count} words, body holds {}",
            words.len()
        )));
    }
    if let Some(pair) = words.windows(2).find(|w| w[0] >= w[1]) {
        return Err(DictError::Parse(format!(
            "word list out of order at {:?} / {:?}",
            pair[0].text(),
            pair[1].text()
        )));
    }

    if max_word_length == 0 {
        return Ok(words);
    }
    Ok(words
        .into_iter()
        .filter(|w| w.char_len() <= max_word_length)
        .collect())
}

/// Open a compiled word list through a read-only memory map.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn open(path: &Path, max_word_length: usize) -> Result<Option<Vec<Word>>, DictError> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path).map_err(|e| DictError::io(path, e))?;
    // SAFETY: The file is opened read-only and the mapping is immutable.
    // The Mmap is dropped once decoding below has copied the words out.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| DictError::io(path, e))?;
    let words = from_bytes(&mmap, max_word_length)?;
    debug!(path = %path.display(), words = words.len(), "opened compiled dictionary");
    Ok(Some(words))
}

/// Atomic write: write to a temporary sibling, then rename.
pub fn save(path: &Path, words: &[Word]) -> Result<(), DictError> {
    let bytes = to_bytes(words)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DictError::io(parent, e))?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &bytes).map_err(|e| DictError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| DictError::io(path, e))?;
    Ok(())
}

/// Path of the compiled file for dictionary `name` under `home`.
pub fn path_for(home: &Path, name: &str) -> std::path::PathBuf {
    home.join(format!("{name}{COMPILED_SUFFIX}"))
}
