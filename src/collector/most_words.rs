use std::collections::VecDeque;

use super::{ScanState, Span, TokenCollector};
use crate::knife::Lattice;

/// Recall-oriented collection: every non-noise candidate at every position.
///
/// Noise candidates are dropped but still count as coverage, so the
/// single-character fallback only fires for characters nothing has spanned.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostWords;

impl TokenCollector for MostWords {
    fn collect(
        &self,
        lattice: &Lattice,
        state: &mut ScanState,
        out: &mut VecDeque<Span>,
    ) -> usize {
        if lattice.is_separator() {
            return 1;
        }

        for candidate in &lattice.candidates {
            let end = lattice.end_of(candidate);
            state.covered_end = state.covered_end.max(end);
            if !candidate.noise {
                out.push_back(Span {
                    start: lattice.start,
                    end,
                    kind: candidate.kind,
                });
            }
        }

        if lattice.is_empty() && lattice.start >= state.covered_end {
            let fallback = lattice.fallback();
            state.covered_end = lattice.start + 1;
            if !fallback.noise {
                out.push_back(Span {
                    start: lattice.start,
                    end: lattice.start + 1,
                    kind: fallback.kind,
                });
            }
        }

        lattice.step.max(1)
    }
}
