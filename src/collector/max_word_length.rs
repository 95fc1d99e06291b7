use std::collections::VecDeque;

use super::{ScanState, Span, TokenCollector};
use crate::knife::Lattice;

/// Greedy longest match: one span per position, jumping past it.
///
/// Nothing is suppressed, so the spans tile every non-whitespace character.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxWordLength;

impl TokenCollector for MaxWordLength {
    fn collect(
        &self,
        lattice: &Lattice,
        state: &mut ScanState,
        out: &mut VecDeque<Span>,
    ) -> usize {
        if lattice.is_separator() {
            return 1;
        }
        let chosen = lattice.longest().copied().unwrap_or_else(|| lattice.fallback());
        let end = lattice.end_of(&chosen);
        state.covered_end = state.covered_end.max(end);
        out.push_back(Span {
            start: lattice.start,
            end,
            kind: chosen.kind,
        });
        chosen.len.max(1)
    }
}
