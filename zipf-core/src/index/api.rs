//! Enumeration and the deduplicated word view.

use crate::analyzer::tokenizer::TokenSequence;
use crate::index::types::FrequencyIndex;
use zipf_types::{FrequencyEntry, IndexError};

impl<H> FrequencyIndex<H> {
    /// Returns the entry in slot `index`, or `None` if the slot is empty or
    /// out of range.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<FrequencyEntry<'_>> {
        let slot = self.slots.get(index).copied().flatten()?;
        Some(FrequencyEntry::new(self.words.get(slot.span), slot.count))
    }

    /// Iterates every slot in index order, empty ones included.
    pub fn slots(&self) -> impl Iterator<Item = Option<FrequencyEntry<'_>>> + '_ {
        self.slots.iter().map(|slot| {
            slot.map(|s| FrequencyEntry::new(self.words.get(s.span), s.count))
        })
    }

    /// Iterates occupied slots in slot-index order.
    ///
    /// The order is neither insertion order nor frequency order. Sort the
    /// result for presentation.
    pub fn iter(&self) -> impl Iterator<Item = FrequencyEntry<'_>> + '_ {
        self.slots().flatten()
    }

    /// Collects the occupied slots into a dense list, in slot order.
    pub fn entries(&self) -> Vec<FrequencyEntry<'_>> {
        let mut out = Vec::with_capacity(self.occupied);
        out.extend(self.iter());
        out
    }

    /// Returns each distinct word exactly once, in slot order.
    pub fn distinct_words(&self) -> Vec<&str> {
        self.iter().map(|e| e.word).collect()
    }
}

/// Returns the distinct words of `tokens`, each once.
///
/// Built on a [`FrequencyIndex`] sized to the token count, so the result is
/// in slot order rather than first-appearance order.
///
/// # Errors
///
/// Only `IndexError::StorageExhausted`; the capacity always suffices.
///
/// # Example
///
/// ```
/// use zipf_core::{filter_unique_words, Tokenizer};
///
/// let tokens = Tokenizer::new().extract_words("the cat the hat");
/// let mut unique = filter_unique_words(&tokens).unwrap();
/// unique.sort();
/// assert_eq!(unique, ["cat", "hat", "the"]);
/// ```
pub fn filter_unique_words(tokens: &TokenSequence<'_>) -> Result<Vec<String>, IndexError> {
    let index = FrequencyIndex::construct(tokens, tokens.count_words().max(1))?;
    Ok(index.iter().map(|e| e.word.to_owned()).collect())
}
