//! End-to-end word-frequency pipeline.
//!
//! Wires the stages together the way the `zipf` binary uses them:
//! lowercase, extract words, then index with the token count as capacity.
//! Each stage is also callable on its own so callers can show intermediate
//! results.

use log::debug;

use crate::analyzer::{TextNormalizer, TokenSequence, Tokenizer};
use crate::index::FrequencyIndex;
use zipf_types::{HashKind, IndexConfig, IndexError};

/// Lowercase → tokenize → index.
///
/// # Example
///
/// ```
/// use zipf_core::Pipeline;
///
/// let index = Pipeline::default().run("The cat saw THE hat").unwrap();
/// assert_eq!(index.frequency_of("the"), 2);
/// assert_eq!(index.frequency_of("cat"), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    config: IndexConfig,
}

impl Pipeline {
    /// Creates a pipeline with the given index configuration.
    pub const fn new(config: IndexConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
            config,
        }
    }

    /// Returns the index configuration.
    #[inline]
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Lowercases raw text.
    pub fn lowercase(&self, text: &str) -> String {
        self.normalizer.lowercase(text)
    }

    /// Extracts words from lowercased text.
    pub fn extract_words<'n>(&self, lowered: &'n str) -> TokenSequence<'n> {
        self.tokenizer.extract_words(lowered)
    }

    /// Indexes a token sequence.
    ///
    /// Capacity is the token count, the loosest bound that can never be
    /// exceeded, with a floor of 1 so that a text without words still yields
    /// a valid, empty index.
    ///
    /// # Errors
    ///
    /// Only `IndexError::StorageExhausted`; the capacity always suffices.
    pub fn index(&self, tokens: &TokenSequence<'_>) -> Result<FrequencyIndex<HashKind>, IndexError> {
        let capacity = tokens.count_words().max(1);
        FrequencyIndex::construct_with_config(tokens, capacity, self.config)
    }

    /// Runs every stage on raw text.
    ///
    /// # Errors
    ///
    /// See [`index`](Self::index).
    pub fn run(&self, text: &str) -> Result<FrequencyIndex<HashKind>, IndexError> {
        let lowered = self.lowercase(text);
        let tokens = self.extract_words(&lowered);
        debug!(
            "pipeline: {} bytes, {} tokens, hash {}",
            text.len(),
            tokens.count_words(),
            self.config.hash
        );
        self.index(&tokens)
    }
}
