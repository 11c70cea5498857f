//! Presentation of an index: frequency ranking and pipeline stage dumps.

use std::io::{self, Write};

use zipf_core::{FrequencyEntry, FrequencyIndex, TokenSequence};

/// Separator between words in the stage dump.
const STAGE_SEPARATOR: u8 = b'-';

/// Orders entries by descending count.
///
/// The sort is stable and the entries start in slot order, so words with
/// equal counts keep their slot order.
pub fn rank_by_frequency<H>(index: &FrequencyIndex<H>) -> Vec<FrequencyEntry<'_>> {
    let mut entries = index.entries();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// Writes one line per entry, most frequent first.
///
/// Plain lines are `word count`. Ranked lines are tab-separated
/// `rank word count rank*count`; under Zipf's law the last column stays
/// roughly constant.
pub fn write_ranking<W: Write>(
    out: &mut W,
    ranking: &[FrequencyEntry<'_>],
    top: Option<usize>,
    ranked: bool,
) -> io::Result<()> {
    let limit = top.unwrap_or(ranking.len());

    for (i, entry) in ranking.iter().take(limit).enumerate() {
        let rank = i as u64 + 1;
        if ranked {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                rank,
                entry.word,
                entry.count,
                rank * u64::from(entry.count)
            )?;
        } else {
            writeln!(out, "{}", entry)?;
        }
    }

    Ok(())
}

/// Writes every intermediate product of the pipeline.
pub fn write_stages<W: Write, H>(
    out: &mut W,
    original: &str,
    lowered: &str,
    tokens: &TokenSequence<'_>,
    index: &FrequencyIndex<H>,
) -> io::Result<()> {
    let unique: TokenSequence<'_> = index.distinct_words().into_iter().collect();

    writeln!(out, "text, original and lowercase:")?;
    writeln!(out, "\t{}", original)?;
    writeln!(out, "\t{}", lowered)?;
    writeln!(out)?;
    writeln!(out, "extracted words: {}", tokens.join(STAGE_SEPARATOR))?;
    writeln!(out)?;
    writeln!(out, "filtered words: {}", unique.join(STAGE_SEPARATOR))?;
    writeln!(out)?;
    writeln!(out, "number of unique words: {}", unique.count_words())?;
    writeln!(out)?;
    writeln!(out, "frequency map of extracted words:")?;

    for (slot, entry) in index.slots().enumerate() {
        match entry {
            Some(e) => writeln!(out, "\t[{}] {}: {}", slot, e.word, e.count)?,
            None => writeln!(out, "\t[{}] (empty)", slot)?,
        }
    }

    writeln!(out)
}
