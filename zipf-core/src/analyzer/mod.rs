//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lowercases raw text (ASCII only)
//! - **Tokenizer**: Splits lowercased text into alphabetic words

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::{count_delimited, TokenSequence, Tokenizer};
