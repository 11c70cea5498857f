//! End-to-end properties of the lowercase, tokenize and index pipeline.

use zipf_core::{
    filter_unique_words, FrequencyIndex, HashKind, IndexConfig, IndexError, Pipeline,
    TextNormalizer, Tokenizer,
};

/// Builds a text where word `r` (1-based) appears roughly `n / r` times,
/// words interleaved in a fixed order and separated by mixed punctuation.
fn zipfian_text(vocabulary: &[&str], n: usize) -> String {
    const SEPARATORS: [&str; 4] = [" ", ", ", "\n", " 42 "];

    let mut text = String::new();
    let mut emitted = 0;
    for round in 1..=n {
        for (i, word) in vocabulary.iter().enumerate() {
            if round % (i + 1) == 0 {
                if emitted % 3 == 0 {
                    text.push_str(&word.to_ascii_uppercase());
                } else {
                    text.push_str(word);
                }
                text.push_str(SEPARATORS[emitted % SEPARATORS.len()]);
                emitted += 1;
            }
        }
    }
    text
}

#[test]
fn counts_follow_generated_distribution() {
    let vocabulary = ["the", "of", "and", "to", "in", "eht", "fo"];
    let n = 420;
    let text = zipfian_text(&vocabulary, n);

    for config in [IndexConfig::code_sum(), IndexConfig::fx()] {
        let index = Pipeline::new(config).run(&text).unwrap();
        assert_eq!(index.len(), vocabulary.len());

        for (i, word) in vocabulary.iter().enumerate() {
            assert_eq!(
                index.frequency_of(word) as usize,
                n / (i + 1),
                "{word} with {}",
                config.hash
            );
        }
    }
}

#[test]
fn rank_times_count_is_roughly_constant() {
    let vocabulary = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
    let text = zipfian_text(&vocabulary, 600);
    let index = Pipeline::default().run(&text).unwrap();

    let mut entries = index.entries();
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    for (rank, entry) in entries.iter().enumerate() {
        assert_eq!(entry.word, vocabulary[rank]);
        assert_eq!((rank as u32 + 1) * entry.count, 600);
    }
}

#[test]
fn total_tokens_match_tokenizer() {
    let text = "It was the best of times, it was the worst of times; \
                it was the age of wisdom, it was the age of foolishness.";
    let lowered = TextNormalizer::new().lowercase(text);
    let tokens = Tokenizer::new().extract_words(&lowered);
    let index = Pipeline::default().index(&tokens).unwrap();

    assert_eq!(index.total_tokens(), tokens.count_words() as u64);
    assert_eq!(index.frequency_of("it"), 4);
    assert_eq!(index.frequency_of("was"), 4);
    assert_eq!(index.frequency_of("of"), 4);
    assert_eq!(index.frequency_of("times"), 2);
    assert_eq!(index.frequency_of("foolishness"), 1);
    assert_eq!(index.frequency_of("It"), 0);
}

#[test]
fn unique_words_match_index() {
    let lowered = TextNormalizer::new().lowercase("To be, or not to be: that is the question.");
    let tokens = Tokenizer::new().extract_words(&lowered);

    let mut unique = filter_unique_words(&tokens).unwrap();
    unique.sort();
    assert_eq!(unique, ["be", "is", "not", "or", "question", "that", "the", "to"]);

    let index = Pipeline::default().index(&tokens).unwrap();
    assert_eq!(index.len(), unique.len());
}

#[test]
fn undersized_capacity_is_an_error() {
    let lowered = TextNormalizer::new().lowercase("one two three four");
    let tokens = Tokenizer::new().extract_words(&lowered);

    let err = FrequencyIndex::construct(&tokens, 3).unwrap_err();
    assert_eq!(
        err,
        IndexError::CapacityExceeded {
            capacity: 3,
            position: 3
        }
    );
}

#[test]
fn non_ascii_text_splits_words() {
    let index = Pipeline::new(IndexConfig { hash: HashKind::Fx })
        .run("Café naïve ÉCOLE")
        .unwrap();

    assert_eq!(index.frequency_of("caf"), 1);
    assert_eq!(index.frequency_of("na"), 1);
    assert_eq!(index.frequency_of("ve"), 1);
    assert_eq!(index.frequency_of("cole"), 1);
    assert_eq!(index.len(), 4);
}
