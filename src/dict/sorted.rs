use super::{Dictionary, Hit, Word};

/// Flat dictionary: one sorted array, binary search per probe.
///
/// Used for the small dictionaries (surnames, noise lists, units,
/// combinatorics) where hashing by leading character buys nothing.
pub struct SortedDictionary {
    words: Vec<Word>,
}

impl SortedDictionary {
    /// `words` must be sorted and free of duplicates; see [`super::sort_words`].
    pub fn new(words: Vec<Word>) -> Self {
        debug_assert!(words.windows(2).all(|w| w[0] < w[1]));
        Self { words }
    }
}

/// Binary search `probe` among `len` sorted entries addressed through `at`.
///
/// Shared by both backends: the bucketed one searches a list of indices into
/// its global array, the sorted one searches the array directly.
pub(super) fn search_sorted<'a>(
    len: usize,
    at: impl Fn(usize) -> (usize, &'a Word),
    probe: &[char],
) -> Hit<'a> {
    if probe.is_empty() {
        return Hit::new(None, len > 0);
    }

    let (mut lo, mut hi) = (0usize, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let (_, word) = at(mid);
        match word.cmp_chars(probe) {
            std::cmp::Ordering::Less => lo = mid + 1,
            std::cmp::Ordering::Greater => hi = mid,
            std::cmp::Ordering::Equal => {
                // Any longer entry sharing this prefix sorts right after it.
                let prefix = mid + 1 < len && at(mid + 1).1.starts_with_chars(probe);
                return Hit::new(Some(at(mid)), prefix);
            }
        }
    }

    // `lo` is the insertion point: the first entry greater than the probe.
    let prefix = lo < len && at(lo).1.starts_with_chars(probe);
    Hit::new(None, prefix)
}

impl Dictionary for SortedDictionary {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    fn search(&self, buffer: &[char], offset: usize, length: usize) -> Hit<'_> {
        let probe = &buffer[offset..offset + length];
        let words = self.words.as_slice();
        search_sorted(words.len(), move |i| (i, &words[i]), probe)
    }
}
