//! Index types.

use crate::arena::{WordArena, WordSpan};
use crate::index::hash::CodeSumHasher;
use zipf_types::Count;

/// An occupied slot: the word's place in the arena and its count.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Slot {
    pub(crate) span: WordSpan,
    pub(crate) count: Count,
}

/// Fixed-capacity, open-addressed word-frequency table.
///
/// Built once by [`construct`](FrequencyIndex::construct) and never mutated
/// afterwards. Collisions are resolved by linear probing with wraparound, and
/// the table never grows: the capacity given at construction is the most
/// distinct words it will ever hold.
///
/// `H` picks each word's home slot. The default, [`CodeSumHasher`], keeps slot
/// placement reproducible.
#[derive(Debug)]
pub struct FrequencyIndex<H = CodeSumHasher> {
    pub(crate) slots: Box<[Option<Slot>]>,
    pub(crate) words: WordArena,
    pub(crate) hasher: H,
    /// Number of occupied slots
    pub(crate) occupied: usize,
    /// Number of tokens inserted, duplicates included
    pub(crate) total_tokens: u64,
}

impl<H> FrequencyIndex<H> {
    pub(crate) fn empty(capacity: usize, hasher: H) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            words: WordArena::with_capacity(capacity.min(4096) * 8),
            hasher,
            occupied: 0,
            total_tokens: 0,
        }
    }

    /// Returns the number of slots, fixed at construction.
    #[inline(always)]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if no slot is occupied.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the number of tokens the index was built from.
    ///
    /// Equal to the sum of all counts.
    #[inline(always)]
    #[must_use]
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Returns the hasher used for home slots.
    #[inline(always)]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}
