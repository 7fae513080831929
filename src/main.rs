//! Command-line front-end: a thin caller over the library.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use excerpts::{lexicon, AugmentOpts, DatasetLoader, PreprocessOpts, Segment};

/// Sample labeled segments from a plain-text corpus.
#[derive(Debug, Parser)]
#[command(name = "excerpts", version, about)]
struct Cli {
    /// Path to the text file to sample from.
    file: PathBuf,

    /// Maximum number of words per random sample.
    #[arg(long, default_value_t = 100)]
    words: usize,

    /// Number of random samples to print.
    #[arg(long, default_value_t = 1)]
    samples: usize,

    /// Retrieve one specific segment by identifier instead of sampling.
    #[arg(long)]
    segment_id: Option<String>,

    /// Strip punctuation before further processing.
    #[arg(long)]
    remove_punctuation: bool,

    /// Re-tokenize into word/punctuation tokens joined by single spaces.
    #[arg(long)]
    tokenize: bool,

    /// Pad or truncate each sample to exactly this many words.
    #[arg(long)]
    pad_length: Option<usize>,

    /// Number of random word insertions per sample.
    #[arg(long)]
    random_insertion: Option<usize>,

    /// Number of synonym replacement rounds per sample.
    #[arg(long)]
    synonym_replacement: Option<usize>,

    /// Synonym lexicon to install (JSON word -> synonyms map).
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Print each sample as a JSON object instead of plain text.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_sample(label: &str, segment: &Segment, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(segment)?);
        return Ok(());
    }

    println!("{label}:");
    println!("Type: {}", segment.kind);
    println!("ID: {}", segment.id);
    println!("Text: {}", segment.text);
    println!("{}", "-".repeat(80));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // The lexicon is an optional resource: a broken or missing file
    // degrades synonym replacement instead of aborting the run.
    if let Some(path) = &cli.lexicon {
        if let Err(err) = lexicon::init(path) {
            warn!(%err, "continuing without a synonym lexicon");
        }
    }

    let loader = DatasetLoader::from_path(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let preprocess = PreprocessOpts {
        remove_punctuation: cli.remove_punctuation,
        tokenize: cli.tokenize,
        pad_length: cli.pad_length,
    };
    let augment = AugmentOpts {
        random_insertion: cli.random_insertion,
        synonym_replacement: cli.synonym_replacement,
    };

    if let Some(id) = &cli.segment_id {
        match loader.get_segment_by_id(id, &preprocess, &augment) {
            Some(segment) => print_sample("Segment", &segment, cli.json)?,
            None => println!("no segment found for id {id:?}"),
        }
        return Ok(());
    }

    for i in 0..cli.samples {
        match loader.get_random_segment(cli.words, &preprocess, &augment) {
            Some(segment) => print_sample(&format!("Sample {}", i + 1), &segment, cli.json)?,
            None => {
                println!("no segment found");
                break;
            }
        }
    }

    Ok(())
}
