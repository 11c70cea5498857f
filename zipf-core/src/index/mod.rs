//! Open-addressed word-frequency index.
//!
//! A fixed-size table of `capacity` slots, built once from a token sequence.
//! Every word starts probing at a home slot picked by a [`WordHasher`] and
//! moves forward one slot at a time, wrapping at the end, until it finds
//! itself or an empty slot.
//!
//! Memory Layout:
//! - Slots are one boxed slice allocated at construction and never resized
//! - Word text lives in a single bump-allocated arena; slots hold spans
//!
//! Threading:
//! - [`FrequencyIndex`] is built and queried on one thread. It is never
//!   mutated after construction.

mod api;
mod builder;
mod hash;
mod lookup;
mod stats;
mod types;

pub use api::filter_unique_words;
pub use hash::{code_sum, CodeSumHasher, FxWordHasher, WordHasher};
pub use stats::IndexStats;
pub use types::FrequencyIndex;
