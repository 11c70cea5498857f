//! Bounded input.

use std::io::{self, Read};

/// Reads at most `limit` bytes from `reader`.
///
/// Stops early at end of input. A multi-byte character cut in half by the
/// limit, or any other invalid UTF-8, is replaced with U+FFFD; neither can be
/// part of a word.
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> io::Result<String> {
    let mut buf = Vec::with_capacity(limit.min(1 << 20));
    reader.take(limit as u64).read_to_end(&mut buf)?;

    Ok(match String::from_utf8(buf) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
