//! Home-slot hashing.
//!
//! Probing only ever asks one question of a hash: which slot does a word
//! start at. [`WordHasher`] is that question, so the probing code never sees
//! which hash is in use.

use std::hash::Hasher;

use rustc_hash::FxHasher;
use zipf_types::HashKind;

/// Picks the slot where probing for a word starts.
pub trait WordHasher {
    /// Returns the home slot of `word` in a table of `capacity` slots.
    ///
    /// `capacity` is at least 1 and the result must be below it.
    fn home_slot(&self, word: &str, capacity: usize) -> usize;
}

/// Sum of the word's byte codes.
///
/// Words are ASCII, so byte codes and character codes agree.
#[inline(always)]
pub fn code_sum(word: &str) -> u64 {
    word.bytes().map(u64::from).sum()
}

/// `code_sum(word) mod capacity`.
///
/// Anagrams always collide and short words crowd the low slots. Slot
/// placement follows from the formula alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeSumHasher;

impl WordHasher for CodeSumHasher {
    #[inline(always)]
    fn home_slot(&self, word: &str, capacity: usize) -> usize {
        (code_sum(word) % capacity as u64) as usize
    }
}

/// `FxHasher` over the word's bytes, reduced modulo the capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FxWordHasher;

impl WordHasher for FxWordHasher {
    #[inline(always)]
    fn home_slot(&self, word: &str, capacity: usize) -> usize {
        let mut hasher = FxHasher::default();
        hasher.write(word.as_bytes());
        (hasher.finish() % capacity as u64) as usize
    }
}

impl WordHasher for HashKind {
    #[inline]
    fn home_slot(&self, word: &str, capacity: usize) -> usize {
        match self {
            HashKind::CodeSum => CodeSumHasher.home_slot(word, capacity),
            HashKind::Fx => FxWordHasher.home_slot(word, capacity),
        }
    }
}
