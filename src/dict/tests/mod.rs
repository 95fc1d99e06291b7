mod compiled;
mod loader;

use super::Word;

/// Sorted word list from string literals.
pub(super) fn words(texts: &[&str]) -> Vec<Word> {
    super::sort_words(texts.iter().map(|t| Word::new(*t)).collect())
}

pub(super) fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
