
use std::sync::Arc;

use crate::collector::Mode;
use crate::dict::Dictionaries;
use crate::segmenter::Segmenter;
use crate::token::Token;

pub(super) fn segmenter(dicts: Arc<Dictionaries>, mode: Mode) -> Segmenter {
    Segmenter::new(dicts, mode)
}

pub(super) fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

pub(super) fn increments(tokens: &[Token]) -> Vec<usize> {
    tokens.iter().map(|t| t.position_increment).collect()
}
