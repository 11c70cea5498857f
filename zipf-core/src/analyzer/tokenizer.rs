//! Word Tokenizer Module
//!
//! Splits lowercased text into words. A word is a maximal run of ASCII
//! alphabetic bytes; everything else (digits, punctuation, whitespace and any
//! non-ASCII byte) separates words and is thrown away.
//!
//! ## What It Does
//!
//! Given `"sdfasdf10101 the the"`, it emits each word with its position in
//! the token sequence:
//!
//! ```ignore
//! ("sdfasdf", 0)
//! ("the", 1)
//! ("the", 2)
//! ```
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the input, not new strings
//! - **Streaming**: [`Tokenizer::tokenize`] emits through a callback
//! - **Materialized**: [`Tokenizer::extract_words`] collects a [`TokenSequence`]
//!   when the caller needs to walk the tokens more than once
//!
//! ## Input Contract
//!
//! The tokenizer does not lowercase. Run the input through
//! [`TextNormalizer`](super::TextNormalizer) first if `The` and `the` should
//! be the same word.

use memchr::memchr_iter;

/// Returns `true` if `b` can be part of a word.
#[inline(always)]
pub const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Streaming word tokenizer.
///
/// ## Example
///
/// ```
/// use zipf_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::new();
/// let mut words = Vec::new();
///
/// tokenizer.tokenize("helqweql1221o 1212 the", |text, pos| {
///     words.push((text, pos));
/// });
///
/// assert_eq!(words, [("helqweql", 0), ("o", 1), ("the", 2)]);
/// ```
///
/// ## How It Works
///
/// A single forward scan over the bytes. A run starts at the first alphabetic
/// byte and ends at the next non-alphabetic byte or at the end of input. Runs
/// consist of ASCII bytes only, so both ends always fall on character
/// boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(word, position)` for every word, left to
    /// right. Positions start at 0 and increase by one per word.
    #[inline]
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize),
    {
        let bytes = text.as_bytes();
        let mut start: Option<usize> = None;
        let mut pos = 0usize;

        for (i, &b) in bytes.iter().enumerate() {
            match (is_word_byte(b), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    emit(&text[s..i], pos);
                    pos += 1;
                    start = None;
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            emit(&text[s..], pos);
        }
    }

    /// Collects every word of `text` into a [`TokenSequence`].
    pub fn extract_words<'n>(&self, text: &'n str) -> TokenSequence<'n> {
        let mut tokens = Vec::new();
        self.tokenize(text, |word, _| tokens.push(word));
        TokenSequence { tokens }
    }
}

/// Ordered words of a text, in the order they appeared.
///
/// Each token borrows from the text it was extracted from. The sequence can
/// be iterated any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> TokenSequence<'a> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Number of tokens in the sequence.
    ///
    /// This is the natural capacity bound for a frequency index over the
    /// sequence: there are never more distinct words than words.
    #[inline]
    #[must_use]
    pub fn count_words(&self) -> usize {
        self.tokens.len()
    }

    /// Same as [`count_words`](Self::count_words).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the text contained no words.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).copied()
    }

    /// Iterates tokens in source order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a str>> {
        self.tokens.iter().copied()
    }

    /// Returns the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Renders the sequence with `sep` written after every token.
    ///
    /// `sep` must be an ASCII byte that cannot occur inside a word.
    /// [`count_delimited`] recovers the token count from the result.
    pub fn join(&self, sep: u8) -> String {
        debug_assert!(
            sep.is_ascii() && !is_word_byte(sep),
            "separator must be ASCII and non-alphabetic"
        );

        let total: usize = self.tokens.iter().map(|t| t.len() + 1).sum();
        let mut out = String::with_capacity(total);
        for token in &self.tokens {
            out.push_str(token);
            out.push(sep as char);
        }
        out
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s TokenSequence<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, &'a str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counts the non-empty fields of a `sep`-delimited word list.
///
/// Accepts both separator-terminated lists (as produced by
/// [`TokenSequence::join`]) and separator-joined ones. Empty fields from
/// doubled separators are not counted.
pub fn count_delimited(text: &str, sep: u8) -> usize {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    let mut count = 0usize;

    for i in memchr_iter(sep, bytes) {
        if start < i {
            count += 1;
        }
        start = i + 1;
    }

    if start < bytes.len() {
        count += 1;
    }

    count
}
