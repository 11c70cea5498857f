//! Index construction.

use log::{debug, warn};

use crate::index::hash::{CodeSumHasher, WordHasher};
use crate::index::types::{FrequencyIndex, Slot};
use zipf_types::{HashKind, IndexConfig, IndexError};

impl FrequencyIndex<CodeSumHasher> {
    /// Builds an index over `tokens` with `capacity` slots, using the
    /// code-sum hash.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InvalidCapacity` if `capacity` is 0.
    /// Returns `IndexError::CapacityExceeded` if `tokens` holds more than
    /// `capacity` distinct words.
    ///
    /// # Example
    ///
    /// ```
    /// use zipf_core::FrequencyIndex;
    ///
    /// let index = FrequencyIndex::construct(["the", "cat", "the"], 3).unwrap();
    /// assert_eq!(index.frequency_of("the"), 2);
    /// assert_eq!(index.len(), 2);
    /// ```
    pub fn construct<'t, I>(tokens: I, capacity: usize) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        Self::construct_with_hasher(tokens, capacity, CodeSumHasher)
    }
}

impl FrequencyIndex<HashKind> {
    /// Builds an index with the hash selected by `config`.
    ///
    /// # Errors
    ///
    /// Same as [`construct`](FrequencyIndex::construct).
    pub fn construct_with_config<'t, I>(
        tokens: I,
        capacity: usize,
        config: IndexConfig,
    ) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        Self::construct_with_hasher(tokens, capacity, config.hash)
    }
}

impl<H: WordHasher> FrequencyIndex<H> {
    /// Builds an index using `hasher` for home slots.
    ///
    /// Tokens are inserted in iteration order. The first occurrence of a word
    /// claims a slot; later occurrences only bump its count. Empty strings are
    /// not words and are skipped.
    ///
    /// On error no index is returned.
    ///
    /// # Errors
    ///
    /// Same as [`construct`](FrequencyIndex::construct), plus
    /// `IndexError::StorageExhausted` if the distinct words together exceed
    /// `u32::MAX` bytes.
    pub fn construct_with_hasher<'t, I>(
        tokens: I,
        capacity: usize,
        hasher: H,
    ) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        if capacity == 0 {
            return Err(IndexError::InvalidCapacity { capacity });
        }

        let mut index = Self::empty(capacity, hasher);

        for (position, token) in tokens.into_iter().enumerate() {
            if token.is_empty() {
                continue;
            }

            if let Err(err) = index.insert(token, position) {
                warn!("frequency index construction failed: {}", err);
                return Err(err);
            }
        }

        debug_assert_eq!(index.occupied, index.words.len());
        debug!(
            "frequency index built: {} tokens, {} distinct words, {} slots",
            index.total_tokens, index.occupied, capacity
        );

        Ok(index)
    }

    /// Inserts one occurrence of `word`.
    ///
    /// Probes from the home slot upwards, wrapping at the end of the table,
    /// and stops at the first slot that is empty or already holds `word`.
    /// Each slot is visited at most once.
    fn insert(&mut self, word: &str, position: usize) -> Result<(), IndexError> {
        let capacity = self.slots.len();
        let mut idx = self.hasher.home_slot(word, capacity);
        debug_assert!(idx < capacity, "home slot out of range");

        for _ in 0..capacity {
            let slot = &mut self.slots[idx];
            match slot {
                None => {
                    let span = self
                        .words
                        .push(word)
                        .ok_or(IndexError::StorageExhausted { position })?;
                    *slot = Some(Slot { span, count: 1 });
                    self.occupied += 1;
                    self.total_tokens += 1;
                    return Ok(());
                }
                Some(entry) if self.words.get(entry.span) == word => {
                    entry.count = entry.count.saturating_add(1);
                    self.total_tokens += 1;
                    return Ok(());
                }
                Some(_) => {}
            }

            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }

        Err(IndexError::CapacityExceeded { capacity, position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::hash::FxWordHasher;

    /// Sends every word to slot 0.
    #[derive(Debug)]
    struct ConstantHasher;

    impl WordHasher for ConstantHasher {
        fn home_slot(&self, _word: &str, _capacity: usize) -> usize {
            0
        }
    }

    fn slot_words<H>(index: &FrequencyIndex<H>) -> Vec<Option<&str>> {
        index.slots().map(|s| s.map(|e| e.word)).collect()
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = FrequencyIndex::construct(["a"], 0).unwrap_err();
        assert_eq!(err, IndexError::InvalidCapacity { capacity: 0 });

        let err = FrequencyIndex::construct(std::iter::empty::<&str>(), 0).unwrap_err();
        assert_eq!(err, IndexError::InvalidCapacity { capacity: 0 });
    }

    #[test]
    fn empty_tokens_give_empty_index() {
        let index = FrequencyIndex::construct(std::iter::empty::<&str>(), 4).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.capacity(), 4);
        assert_eq!(index.total_tokens(), 0);
        assert!(index.slots().all(|s| s.is_none()));
    }

    #[test]
    fn repeated_word_uses_one_slot() {
        let index = FrequencyIndex::construct(["the", "the", "the"], 3).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.frequency_of("the"), 3);
    }

    #[test]
    fn word_lands_in_home_slot() {
        // "the" sums to 321; 321 mod 10 = 1.
        let index = FrequencyIndex::construct(["the"], 10).unwrap();
        assert_eq!(
            slot_words(&index),
            [None, Some("the"), None, None, None, None, None, None, None, None]
        );
    }

    #[test]
    fn anagram_collision_probes_forward() {
        // Both sum to 321, home slot 1; the second occurrence moves to slot 2.
        let index = FrequencyIndex::construct(["the", "eht", "the"], 10).unwrap();
        assert_eq!(index.slot(1).map(|e| (e.word, e.count)), Some(("the", 2)));
        assert_eq!(index.slot(2).map(|e| (e.word, e.count)), Some(("eht", 1)));
    }

    #[test]
    fn probing_wraps_around() {
        // 'c' = 99, 99 mod 3 = 0; "bb" = 196, 196 mod 3 = 1; "ab" = 195,
        // 195 mod 3 = 0 -> slot 0 taken, slot 1 taken, lands in slot 2.
        let index = FrequencyIndex::construct(["c", "bb", "ab"], 3).unwrap();
        assert_eq!(slot_words(&index), [Some("c"), Some("bb"), Some("ab")]);

        // "b" = 98 mod 3 = 2; "zz" = 244 mod 3 = 1, slots 1 and 2 taken -> wraps to 0.
        let index = FrequencyIndex::construct(["bb", "b", "zz"], 3).unwrap();
        assert_eq!(slot_words(&index), [Some("zz"), Some("bb"), Some("b")]);
    }

    #[test]
    fn first_occurrence_decides_slot() {
        let a = FrequencyIndex::construct(["the", "eht"], 10).unwrap();
        let b = FrequencyIndex::construct(["eht", "the"], 10).unwrap();

        assert_eq!(a.slot(1).unwrap().word, "the");
        assert_eq!(b.slot(1).unwrap().word, "eht");
        assert_eq!(a.frequency_of("the"), b.frequency_of("the"));
        assert_eq!(a.frequency_of("eht"), b.frequency_of("eht"));
    }

    #[test]
    fn exact_capacity_fits() {
        let index = FrequencyIndex::construct(["a", "b", "c", "a"], 3).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.slots().all(|s| s.is_some()));
    }

    #[test]
    fn capacity_exceeded_reports_position() {
        let err = FrequencyIndex::construct(["a", "b", "a", "c"], 2).unwrap_err();
        assert_eq!(
            err,
            IndexError::CapacityExceeded {
                capacity: 2,
                position: 3
            }
        );
    }

    #[test]
    fn full_table_still_counts_known_words() {
        let index = FrequencyIndex::construct(["a", "b", "a", "b", "b"], 2).unwrap();
        assert_eq!(index.frequency_of("a"), 2);
        assert_eq!(index.frequency_of("b"), 3);
    }

    #[test]
    fn capacity_one() {
        let index = FrequencyIndex::construct(["x", "x"], 1).unwrap();
        assert_eq!(index.frequency_of("x"), 2);

        let err = FrequencyIndex::construct(["x", "y"], 1).unwrap_err();
        assert!(matches!(err, IndexError::CapacityExceeded { .. }));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let index = FrequencyIndex::construct(["The", "the"], 4).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.frequency_of("The"), 1);
        assert_eq!(index.frequency_of("the"), 1);
    }

    #[test]
    fn empty_strings_skipped() {
        let index = FrequencyIndex::construct(["", "a", ""], 1).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.total_tokens(), 1);
    }

    #[test]
    fn custom_hasher_linear_chain() {
        let index =
            FrequencyIndex::construct_with_hasher(["d", "c", "b", "a"], 4, ConstantHasher).unwrap();
        assert_eq!(
            slot_words(&index),
            [Some("d"), Some("c"), Some("b"), Some("a")]
        );
        assert_eq!(index.frequency_of("a"), 1);
    }

    #[test]
    fn custom_hasher_full_table_terminates() {
        let err = FrequencyIndex::construct_with_hasher(["a", "b", "c"], 2, ConstantHasher)
            .unwrap_err();
        assert_eq!(
            err,
            IndexError::CapacityExceeded {
                capacity: 2,
                position: 2
            }
        );
    }

    #[test]
    fn fx_hasher_counts_match_code_sum() {
        let tokens = ["the", "eht", "cat", "the", "act", "tac", "the"];
        let weak = FrequencyIndex::construct(tokens, tokens.len()).unwrap();
        let fx = FrequencyIndex::construct_with_hasher(tokens, tokens.len(), FxWordHasher).unwrap();

        for w in tokens {
            assert_eq!(weak.frequency_of(w), fx.frequency_of(w));
        }
        assert_eq!(weak.len(), fx.len());
    }

    #[test]
    fn construct_with_config_selects_hash() {
        let tokens = ["one", "two", "one"];
        let index = FrequencyIndex::construct_with_config(tokens, 3, IndexConfig::fx()).unwrap();
        assert_eq!(*index.hasher(), HashKind::Fx);
        assert_eq!(index.frequency_of("one"), 2);

        let index =
            FrequencyIndex::construct_with_config(tokens, 3, IndexConfig::default()).unwrap();
        assert_eq!(*index.hasher(), HashKind::CodeSum);
    }
}
