//! Raw text dictionaries: one word per line in `*.dic` files under a
//! dictionary home.
//!
//! Each file is keyed by its path relative to the home, with `/` as the
//! separator and the `.dic` extension stripped, so `division/china.dic`
//! becomes `division/china`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::{sort_words, DictError, Word};

pub const TEXT_EXTENSION: &str = "dic";

/// Only UTF-8 dictionaries are readable.
pub fn check_charset(charset: &str) -> Result<(), DictError> {
    let normalized = charset.trim().to_ascii_lowercase();
    if normalized == "utf-8" || normalized == "utf8" {
        Ok(())
    } else {
        Err(DictError::UnsupportedCharset(charset.to_string()))
    }
}

/// Parse the words of one dictionary file's contents.
///
/// Lines are trimmed; blank lines and `#` comments are skipped, as are words
/// longer than `max_word_length` characters (0 = no limit).
pub fn parse_words(content: &str, max_word_length: usize) -> Vec<Word> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| max_word_length == 0 || line.chars().count() <= max_word_length)
        .map(Word::new)
        .collect();
    sort_words(words)
}

/// Read and parse a single dictionary file.
pub fn read_file(path: &Path, max_word_length: usize) -> Result<Vec<Word>, DictError> {
    let bytes = fs::read(path).map_err(|e| DictError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        DictError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;
    Ok(parse_words(&content, max_word_length))
}

/// Recursively read every `*.dic` file under `home`.
///
/// Returns a map from dictionary key to its sorted, deduplicated words.
/// The map is ordered so iteration over it is deterministic.
pub fn read_tree(
    home: &Path,
    max_word_length: usize,
) -> Result<BTreeMap<String, Vec<Word>>, DictError> {
    if !home.is_dir() {
        return Err(DictError::MissingHome(home.to_path_buf()));
    }
    let mut out = BTreeMap::new();
    walk(home, "", max_word_length, &mut out)?;
    Ok(out)
}

fn walk(
    dir: &Path,
    key_prefix: &str,
    max_word_length: usize,
    out: &mut BTreeMap<String, Vec<Word>>,
) -> Result<(), DictError> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| DictError::io(dir, e))?
        .filter_map(|entry| entry.ok())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            let nested = format!("{key_prefix}{name}/");
            walk(&path, &nested, max_word_length, out)?;
            continue;
        }

        let Some(stem) = name.strip_suffix(&format!(".{TEXT_EXTENSION}")) else {
            continue;
        };
        let key = format!("{key_prefix}{stem}");
        let words = read_file(&path, max_word_length)?;
        debug!(key = %key, words = words.len(), "read dictionary file");
        out.insert(key, words);
    }
    Ok(())
}

/// Whether a dictionary key stays out of the aggregated vocabulary.
pub fn is_skipped(key: &str, skip_prefix: &str) -> bool {
    if skip_prefix.is_empty() {
        return false;
    }
    key.starts_with(skip_prefix) || key.contains(&format!("/{skip_prefix}"))
}
