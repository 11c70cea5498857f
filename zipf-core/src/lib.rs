//! Word tokenization and word-frequency indexing.
//!
//! The pipeline has three stages:
//! - [`TextNormalizer`] lowercases ASCII letters
//! - [`Tokenizer`] splits text into maximal runs of ASCII letters
//! - [`FrequencyIndex`] counts words in a fixed-capacity, linearly probed
//!   hash table
//!
//! [`Pipeline`] runs all three with the token count as the index capacity.
//!
//! ```
//! use zipf_core::{FrequencyIndex, TextNormalizer, Tokenizer};
//!
//! let lowered = TextNormalizer::new().lowercase("ThE cat, THE hat!");
//! let tokens = Tokenizer::new().extract_words(&lowered);
//! let index = FrequencyIndex::construct(&tokens, tokens.count_words()).unwrap();
//!
//! assert_eq!(index.frequency_of("the"), 2);
//! assert_eq!(index.frequency_of("dog"), 0);
//! ```

pub mod analyzer;
mod arena;
pub mod index;
pub mod pipeline;

pub use analyzer::{count_delimited, TextNormalizer, TokenSequence, Tokenizer};
pub use index::{
    filter_unique_words, CodeSumHasher, FrequencyIndex, FxWordHasher, IndexStats, WordHasher,
};
pub use pipeline::Pipeline;
pub use zipf_types::{Count, FrequencyEntry, HashKind, IndexConfig, IndexError};
