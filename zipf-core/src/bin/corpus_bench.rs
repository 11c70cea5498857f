//! Corpus Benchmarking Tool
//!
//! Measures the word-frequency pipeline on a large text file, such as a
//! Project Gutenberg book or a Wikipedia dump, to get realistic throughput
//! numbers.
//!
//! ## What It Benchmarks
//!
//! 1. **Lowercase**: ASCII case folding of the raw text
//! 2. **Tokenize**: Extracting alphabetic words from lowercased text
//! 3. **Index**: Building the frequency index from the token sequence
//!
//! ## Usage
//!
//! ```bash
//! # Default code-sum hash
//! ./target/release/corpus_bench /path/to/book.txt
//!
//! # Fx hash
//! ./target/release/corpus_bench /path/to/book.txt fx
//! ```
//!
//! ## Output
//!
//! ```text
//! === Index ===
//! --------------------------------
//! Mode        : Index
//! Elapsed     : 0.052 s
//! Throughput  : 0.118 GiB/s
//! Tokens      : 1_154_892
//! Tokens/sec  : 22_209_461
//! --------------------------------
//! ```
//!
//! The weak code-sum hash clusters badly on large vocabularies, so expect the
//! index stage to be far slower with it than with `fx`. The index statistics
//! printed at the end show why.
//!
//! ## Tips for Accurate Results
//!
//! - Build with `--release`
//! - Use a large input file (10MB+) for stable measurements
//! - Consider using `taskset` to pin to a specific CPU core

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use zipf_core::{FrequencyIndex, HashKind, TextNormalizer, Tokenizer};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [code-sum|fx]");
        std::process::exit(1);
    }

    let path = &args[1];

    let hash = match args.get(2).map(String::as_str) {
        Some("fx") => HashKind::Fx,
        _ => HashKind::CodeSum,
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = String::from_utf8_lossy(&bytes);

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Hash:      {}\n", hash);

    bench_lowercase(&input);
    bench_tokenize(&input);
    bench_index(&input, hash);

    Ok(())
}

fn bench_lowercase(input: &str) {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Lowercase ===");

    warmup(|| {
        normalizer.lowercase_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.lowercase_into(input, &mut out);
    });

    print_perf("Lowercase", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str) {
    let tokenizer = Tokenizer::new();
    let lowered = TextNormalizer::new().lowercase(input);

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(&lowered, |_t, _p| {
            sink += 1;
        });
        std::hint::black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(&lowered, |_t, _p| {
            local += 1;
        });
        tokens = local;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_index(input: &str, hash: HashKind) {
    let lowered = TextNormalizer::new().lowercase(input);
    let tokens = Tokenizer::new().extract_words(&lowered);
    let capacity = tokens.count_words().max(1);

    println!("=== Index ===");

    let build = || FrequencyIndex::construct_with_hasher(&tokens, capacity, hash);

    warmup(|| {
        std::hint::black_box(build().map(|index| index.len()).ok());
    });

    let elapsed = measure(|| {
        std::hint::black_box(build().map(|index| index.len()).ok());
    });

    print_perf("Index", input.len(), elapsed, tokens.count_words() as u64);

    match build() {
        Ok(index) => println!("Stats       : {}\n", index.stats()),
        Err(err) => eprintln!("Index failed: {}\n", err),
    }
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
