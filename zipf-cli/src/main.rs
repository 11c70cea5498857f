//! `zipf`: reads text from stdin and prints its words by descending
//! frequency.

mod input;
mod report;

use std::ffi::OsStr;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use log::{debug, info};

use zipf_core::{HashKind, IndexConfig, Pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "zipf",
    version,
    about = "Count the words of stdin and print them by descending frequency"
)]
struct Args {
    /// Maximum number of bytes to read from stdin
    #[arg(value_name = "MAX_CHARS")]
    max_chars: usize,

    /// Hash function that places words in the frequency index
    #[arg(long, value_enum, default_value_t = HashArg::CodeSum)]
    hash: HashArg,

    /// Print only the N most frequent words
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,

    /// Print rank, word, count and rank * count, tab-separated
    #[arg(short, long)]
    ranked: bool,

    /// Print every intermediate stage before the ranking
    #[arg(long)]
    stages: bool,

    /// Print index statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashArg {
    /// Sum of byte values; anagrams collide
    CodeSum,
    /// FxHash over the word bytes
    Fx,
}

impl From<HashArg> for HashKind {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::CodeSum => HashKind::CodeSum,
            HashArg::Fx => HashKind::Fx,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // `zipf help` prints usage, like `--help`.
    if std::env::args_os().nth(1).as_deref() == Some(OsStr::new("help")) {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let text = input::read_bounded(io::stdin().lock(), args.max_chars)
        .context("failed to read stdin")?;
    info!("read {} bytes (limit {})", text.len(), args.max_chars);

    let pipeline = Pipeline::new(IndexConfig {
        hash: args.hash.into(),
    });
    let lowered = pipeline.lowercase(&text);
    let tokens = pipeline.extract_words(&lowered);
    let index = pipeline
        .index(&tokens)
        .context("failed to build frequency index")?;
    debug!(
        "{} tokens, {} distinct words, hash {}",
        tokens.count_words(),
        index.len(),
        pipeline.config().hash
    );

    let mut out = BufWriter::new(io::stdout().lock());

    if args.stages {
        report::write_stages(&mut out, &text, &lowered, &tokens, &index)?;
    }

    eprintln!("mapsize: {}", index.len());
    if args.stats {
        let stats = index.stats();
        eprintln!("{}", stats);
        eprintln!("probe histogram: {:?}", stats.probe_histogram.as_slice());
    }

    let ranking = report::rank_by_frequency(&index);
    report::write_ranking(&mut out, &ranking, args.top, args.ranked)?;
    out.flush()?;

    Ok(())
}
