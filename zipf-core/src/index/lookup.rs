//! Point lookup.

use crate::index::hash::WordHasher;
use crate::index::types::FrequencyIndex;
use zipf_types::Count;

impl<H: WordHasher> FrequencyIndex<H> {
    /// Returns how many times `word` was inserted, or 0 if it never was.
    ///
    /// Comparison is exact and case-sensitive; look up lowercased words in an
    /// index built from lowercased text.
    #[inline]
    #[must_use]
    pub fn frequency_of(&self, word: &str) -> Count {
        self.find_slot(word)
            .and_then(|idx| self.slots[idx])
            .map_or(0, |slot| slot.count)
    }

    /// Returns `true` if `word` occupies a slot.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find_slot(word).is_some()
    }

    /// Returns the slot index holding `word`.
    ///
    /// Probes exactly like insertion, starting at the home slot computed for
    /// the table's own capacity. Stops at the first empty slot, since an
    /// insertion of `word` would have claimed it, or after one full sweep.
    pub fn find_slot(&self, word: &str) -> Option<usize> {
        let capacity = self.slots.len();
        let mut idx = self.hasher.home_slot(word, capacity);

        for _ in 0..capacity {
            match &self.slots[idx] {
                None => return None,
                Some(slot) if self.words.get(slot.span) == word => return Some(idx),
                Some(_) => {}
            }

            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::index::FrequencyIndex;

    #[test]
    fn absent_word_is_zero() {
        let index = FrequencyIndex::construct(["the", "cat"], 2).unwrap();
        assert_eq!(index.frequency_of("quux"), 0);
        assert!(!index.contains("quux"));
        assert_eq!(index.find_slot("quux"), None);
    }

    #[test]
    fn empty_word_is_zero() {
        let index = FrequencyIndex::construct(["a"], 1).unwrap();
        assert_eq!(index.frequency_of(""), 0);
    }

    #[test]
    fn lookup_on_empty_index() {
        let index = FrequencyIndex::construct(std::iter::empty::<&str>(), 5).unwrap();
        assert_eq!(index.frequency_of("anything"), 0);
    }

    #[test]
    fn absent_word_in_full_table_terminates() {
        let index = FrequencyIndex::construct(["a", "b", "c"], 3).unwrap();
        assert!(index.slots().all(|s| s.is_some()));
        assert_eq!(index.frequency_of("d"), 0);
        assert_eq!(index.frequency_of("zzz"), 0);
    }

    #[test]
    fn lookup_follows_probe_chain() {
        // "the", "eht" and "het" all start at slot 1 in a 10-slot table.
        let index = FrequencyIndex::construct(["the", "eht", "het", "het"], 10).unwrap();
        assert_eq!(index.find_slot("the"), Some(1));
        assert_eq!(index.find_slot("eht"), Some(2));
        assert_eq!(index.find_slot("het"), Some(3));
        assert_eq!(index.frequency_of("het"), 2);

        // Same home slot, not present: stops at slot 4, which is empty.
        assert_eq!(index.find_slot("teh"), None);
    }

    #[test]
    fn lookup_across_wraparound() {
        let index = FrequencyIndex::construct(["bb", "b", "zz", "zz"], 3).unwrap();
        assert_eq!(index.find_slot("zz"), Some(0));
        assert_eq!(index.frequency_of("zz"), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let index = FrequencyIndex::construct(["the"], 1).unwrap();
        assert_eq!(index.frequency_of("the"), 1);
        assert_eq!(index.frequency_of("The"), 0);
    }
}
