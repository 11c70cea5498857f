//! Core types shared by the zipf word-frequency crates.
//!
//! This crate holds the values that cross crate boundaries: the entries a
//! frequency index hands out, the errors its construction can report, and
//! the configuration that selects a word hash. Keeping them here means the
//! CLI can name them without depending on index internals.

#![warn(missing_docs)]

use core::fmt;

/// Occurrence count of a single word.
///
/// Counts saturate at `u32::MAX`, which is far beyond any text the pipeline
/// reads into memory.
pub type Count = u32;

/// A `(word, count)` pair exposed by a frequency index.
///
/// The word borrows from the index that produced it. Entries are only ever
/// produced for occupied slots, so `count` is at least 1.
///
/// # Example
/// ```
/// use zipf_types::FrequencyEntry;
///
/// let entry = FrequencyEntry::new("the", 3);
/// assert_eq!(entry.to_string(), "the 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrequencyEntry<'a> {
    /// The word, as stored in the index.
    pub word: &'a str,
    /// How many times the word was inserted.
    pub count: Count,
}

impl<'a> FrequencyEntry<'a> {
    /// Creates a new entry.
    #[inline(always)]
    pub const fn new(word: &'a str, count: Count) -> Self {
        Self { word, count }
    }
}

impl fmt::Display for FrequencyEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.count)
    }
}

/// Errors that can occur when constructing a frequency index.
///
/// Empty input is not an error: tokenizing empty text yields an empty
/// token sequence, and indexing it yields an index with no occupied slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// The requested capacity cannot hold any entry.
    InvalidCapacity {
        /// The capacity that was requested.
        capacity: usize,
    },
    /// Every slot was probed without finding a free slot or a matching word.
    ///
    /// The table already holds `capacity` distinct words and the token at
    /// `position` would have been one more.
    CapacityExceeded {
        /// Number of slots in the table.
        capacity: usize,
        /// Zero-based position of the rejected token in the token sequence.
        position: usize,
    },
    /// The combined text of all distinct words outgrew the index's word
    /// storage (`u32::MAX` bytes).
    StorageExhausted {
        /// Zero-based position of the rejected token in the token sequence.
        position: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidCapacity { capacity } => {
                write!(f, "invalid index capacity: {} (min: 1)", capacity)
            }
            IndexError::CapacityExceeded { capacity, position } => {
                write!(
                    f,
                    "index capacity exceeded: token {} found no free slot among {} slots",
                    position, capacity
                )
            }
            IndexError::StorageExhausted { position } => {
                write!(f, "index word storage exhausted at token {}", position)
            }
        }
    }
}

impl core::error::Error for IndexError {}

/// Hash function used to pick a word's home slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashKind {
    /// Sum of the word's byte codes modulo the capacity.
    ///
    /// Weak and collision-prone (every anagram collides), but its slot
    /// placement is reproducible across implementations.
    #[default]
    CodeSum,
    /// `FxHasher` from `rustc-hash`, reduced modulo the capacity.
    Fx,
}

impl HashKind {
    /// Short lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            HashKind::CodeSum => "code-sum",
            HashKind::Fx => "fx",
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexConfig {
    /// Hash function used for home-slot selection.
    /// Default: [`HashKind::CodeSum`]
    pub hash: HashKind,
}

impl IndexConfig {
    /// Configuration with the reproducible code-sum hash.
    pub const fn code_sum() -> Self {
        Self {
            hash: HashKind::CodeSum,
        }
    }

    /// Configuration with the Fx hash.
    pub const fn fx() -> Self {
        Self { hash: HashKind::Fx }
    }
}
