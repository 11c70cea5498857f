//! ASCII case normalization.
//!
//! The first stage of the word pipeline. Lowercasing happens before
//! tokenization so that `The`, `THE` and `the` count as one word.
//!
//! The mapping is fixed and locale-independent: only `A..=Z` change. Every
//! other byte, including each byte of a multi-byte UTF-8 sequence, passes
//! through untouched, so the output always has the input's byte length.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 256] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
    0x80,0x81,0x82,0x83,0x84,0x85,0x86,0x87,0x88,0x89,0x8a,0x8b,0x8c,0x8d,0x8e,0x8f,
    0x90,0x91,0x92,0x93,0x94,0x95,0x96,0x97,0x98,0x99,0x9a,0x9b,0x9c,0x9d,0x9e,0x9f,
    0xa0,0xa1,0xa2,0xa3,0xa4,0xa5,0xa6,0xa7,0xa8,0xa9,0xaa,0xab,0xac,0xad,0xae,0xaf,
    0xb0,0xb1,0xb2,0xb3,0xb4,0xb5,0xb6,0xb7,0xb8,0xb9,0xba,0xbb,0xbc,0xbd,0xbe,0xbf,
    0xc0,0xc1,0xc2,0xc3,0xc4,0xc5,0xc6,0xc7,0xc8,0xc9,0xca,0xcb,0xcc,0xcd,0xce,0xcf,
    0xd0,0xd1,0xd2,0xd3,0xd4,0xd5,0xd6,0xd7,0xd8,0xd9,0xda,0xdb,0xdc,0xdd,0xde,0xdf,
    0xe0,0xe1,0xe2,0xe3,0xe4,0xe5,0xe6,0xe7,0xe8,0xe9,0xea,0xeb,0xec,0xed,0xee,0xef,
    0xf0,0xf1,0xf2,0xf3,0xf4,0xf5,0xf6,0xf7,0xf8,0xf9,0xfa,0xfb,0xfc,0xfd,0xfe,0xff,
];

/// ASCII lowercase normalizer.
///
/// # Performance
///
/// On x86_64 the bulk of the input is lowered 16 bytes at a time with SSE2
/// (part of the baseline, so no runtime detection). The tail, and all input
/// on other architectures, goes through a 256-entry lookup table.
///
/// # Examples
///
/// ```
/// use zipf_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.lowercase("ThE 1212 Café"), "the 1212 café");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Lowercases text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity if
    /// sufficient.
    #[inline]
    pub fn lowercase_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.push_str(input);

        // SAFETY: `lowercase_ascii` only rewrites bytes in `A..=Z` to bytes in
        // `a..=z`. Both ranges are single-byte UTF-8 code points and no other
        // byte is modified, so the buffer remains valid UTF-8.
        let bytes = unsafe { out.as_mut_vec() };
        lowercase_ascii(bytes);
    }

    /// Lowercases text and returns a new String.
    #[inline]
    pub fn lowercase(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.lowercase_into(input, &mut out);
        out
    }
}

#[inline]
fn lowercase_ascii(bytes: &mut [u8]) {
    let done = lowercase_simd(bytes);

    for b in &mut bytes[done..] {
        *b = LOWERCASE_TABLE[*b as usize];
    }
}

/// Lowers whole 16-byte chunks and returns how many bytes were processed.
#[cfg(target_arch = "x86_64")]
#[inline]
fn lowercase_simd(bytes: &mut [u8]) -> usize {
    let mut i = 0usize;

    // SAFETY: SSE2 is always available on x86_64. Every load and store covers
    // `bytes[i..i + 16]`, which the loop condition keeps in bounds, and the
    // unaligned variants place no alignment requirement on the pointer.
    unsafe {
        let below_a = _mm_set1_epi8((b'A' - 1) as i8);
        let above_z = _mm_set1_epi8((b'Z' + 1) as i8);
        let case_bit = _mm_set1_epi8(0x20);

        while i + 16 <= bytes.len() {
            let ptr = bytes.as_mut_ptr().add(i) as *mut __m128i;
            let chunk = _mm_loadu_si128(ptr);

            // Signed compares: bytes >= 0x80 are negative and never match.
            let upper = _mm_and_si128(
                _mm_cmpgt_epi8(chunk, below_a),
                _mm_cmplt_epi8(chunk, above_z),
            );
            _mm_storeu_si128(ptr, _mm_or_si128(chunk, _mm_and_si128(upper, case_bit)));
            i += 16;
        }
    }

    i
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn lowercase_simd(_bytes: &mut [u8]) -> usize {
    0
}
