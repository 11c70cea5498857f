//! Statistics and IndexStats.

use smallvec::SmallVec;

use crate::index::hash::WordHasher;
use crate::index::types::FrequencyIndex;

/// A snapshot of index statistics.
///
/// The probe distance of an entry is how many slots past its home slot it
/// landed, counting wraparound. A distance of 0 means no collision.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    /// Number of slots.
    pub capacity: usize,
    /// Number of occupied slots (distinct words).
    pub distinct_words: usize,
    /// Number of tokens the index was built from.
    pub total_tokens: u64,
    /// Entries not in their home slot.
    pub displaced: usize,
    /// Largest probe distance of any entry.
    pub max_probe: usize,
    /// `probe_histogram[d]` is the number of entries at probe distance `d`.
    pub probe_histogram: SmallVec<[usize; 8]>,
    /// Bytes of word text held by the index.
    pub word_bytes: usize,
}

impl<H: WordHasher> FrequencyIndex<H> {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        let capacity = self.slots.len();
        let mut histogram: SmallVec<[usize; 8]> = SmallVec::new();

        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else { continue };

            let home = self.hasher.home_slot(self.words.get(slot.span), capacity);
            let distance = (idx + capacity - home) % capacity;

            if histogram.len() <= distance {
                histogram.resize(distance + 1, 0);
            }
            histogram[distance] += 1;
        }

        let displaced = histogram.iter().skip(1).sum();
        let max_probe = histogram.len().saturating_sub(1);

        IndexStats {
            capacity,
            distinct_words: self.occupied,
            total_tokens: self.total_tokens,
            displaced,
            max_probe,
            probe_histogram: histogram,
            word_bytes: self.words.bytes_used(),
        }
    }
}

impl IndexStats {
    /// Fraction of slots occupied, between 0.0 and 1.0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.distinct_words as f64 / self.capacity as f64
    }

    /// Average probe distance over all entries.
    pub fn mean_probe(&self) -> f64 {
        if self.distinct_words == 0 {
            return 0.0;
        }

        let total: usize = self
            .probe_histogram
            .iter()
            .enumerate()
            .map(|(distance, n)| distance * n)
            .sum();
        total as f64 / self.distinct_words as f64
    }

    /// Returns approximate memory usage in bytes.
    pub fn memory_usage_bytes(&self) -> usize {
        // Each slot is an Option<(u32 offset, u32 len, u32 count)>.
        let slot_size = std::mem::size_of::<u32>() * 4;
        self.capacity * slot_size + self.word_bytes
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens, {} distinct words, {} slots (load {:.1}%)",
            self.total_tokens,
            self.distinct_words,
            self.capacity,
            self.load_factor() * 100.0
        )?;

        write!(
            f,
            ", {} displaced, max probe {}, mean probe {:.2}",
            self.displaced,
            self.max_probe,
            self.mean_probe()
        )
    }
}
