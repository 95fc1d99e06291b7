use super::sorted::search_sorted;
use super::{Dictionary, Hit, Word};

const LOAD_FACTOR: f64 = 0.75;
const MIN_BUCKETS: usize = 16;

/// Hash-partitioned dictionary for the large general vocabulary.
///
/// Entries are kept in one globally sorted array (so `get(index)` addresses
/// the natural order) and additionally partitioned into buckets by a hash of
/// their leading character. Each bucket lists its entry indices in sort
/// order, so a probe costs one hash plus a binary search over roughly
/// `n / B` entries. The bucket count is fixed at construction.
pub struct BucketedDictionary {
    words: Vec<Word>,
    buckets: Vec<Vec<u32>>,
}

impl BucketedDictionary {
    /// `words` must be sorted and free of duplicates; see [`super::sort_words`].
    pub fn new(words: Vec<Word>) -> Self {
        debug_assert!(words.windows(2).all(|w| w[0] < w[1]));

        let mut leading = 0usize;
        let mut last: Option<char> = None;
        for first in words.iter().filter_map(Word::first_char) {
            if last != Some(first) {
                leading += 1;
                last = Some(first);
            }
        }
        let bucket_count = bucket_count_for(leading);

        let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); bucket_count];
        for (i, word) in words.iter().enumerate() {
            if let Some(first) = word.first_char() {
                // Pushing in global order keeps every bucket sorted.
                buckets[bucket_of(first, bucket_count)].push(i as u32);
            }
        }

        Self { words, buckets }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Smallest power of two holding `distinct` keys under the load factor.
pub(crate) fn bucket_count_for(distinct: usize) -> usize {
    let wanted = (distinct as f64 / LOAD_FACTOR).ceil() as usize;
    wanted.max(MIN_BUCKETS).next_power_of_two()
}

fn bucket_of(c: char, bucket_count: usize) -> usize {
    let h = c as u32;
    let spread = h ^ (h >> 16) ^ (h >> 7);
    spread as usize & (bucket_count - 1)
}

impl Dictionary for BucketedDictionary {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    fn search(&self, buffer: &[char], offset: usize, length: usize) -> Hit<'_> {
        let probe = &buffer[offset..offset + length];
        let Some(&first) = probe.first() else {
            return Hit::new(None, !self.words.is_empty());
        };
        let bucket = self.buckets[bucket_of(first, self.buckets.len())].as_slice();
        let words = self.words.as_slice();
        search_sorted(
            bucket.len(),
            move |i| {
                let idx = bucket[i] as usize;
                (idx, &words[idx])
            },
            probe,
        )
    }
}
