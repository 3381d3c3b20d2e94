//! `lexgram` CLI: approximate lookup against a lexicon file (one word per line).

use clap::{Parser, Subcommand};
use lexgram::{LookupTable, NgramConfig, DEFAULT_BOUNDARY, DEFAULT_K, DEFAULT_NGRAM_LENGTH};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Approximate lexicon lookup via n-gram overlap", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct TableArgs {
    /// Path to a lexicon file (one word per line).
    #[arg(short, long)]
    input: PathBuf,

    /// N-gram length used for indexing and querying.
    #[arg(long, default_value_t = DEFAULT_NGRAM_LENGTH)]
    ngram_length: usize,

    /// Boundary character wrapped around each word.
    #[arg(long, default_value_t = DEFAULT_BOUNDARY)]
    boundary: char,
}

impl TableArgs {
    fn build(&self, words: &[String]) -> Result<LookupTable, Box<dyn std::error::Error>> {
        let cfg = NgramConfig::with_ngram_length(self.ngram_length).boundary(self.boundary);
        Ok(LookupTable::with_config(words, cfg)?)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the closest lexicon words for each query word.
    Query {
        #[command(flatten)]
        table: TableArgs,

        /// Top-k results per query word.
        #[arg(short, long, default_value_t = DEFAULT_K)]
        k: usize,

        /// Print overlap counts next to each match.
        #[arg(long, default_value_t = false)]
        scores: bool,

        /// Query words.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print index statistics for a lexicon file.
    Stats {
        #[command(flatten)]
        table: TableArgs,
    },
}

fn read_lexicon(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read lexicon {}: {e}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Query {
            table,
            k,
            scores,
            words,
        } => {
            let idx = table.build(&read_lexicon(&table.input)?)?;
            for word in &words {
                println!("Results for {:?}:", word);
                if scores {
                    let hits = idx.query_scored(word, k)?;
                    if hits.is_empty() {
                        println!("  {} (no match)", word);
                    }
                    for m in hits {
                        println!("  {}: overlap {}", m.word, m.overlap);
                    }
                } else {
                    for m in idx.query_k(word, k)? {
                        println!("  {}", m);
                    }
                }
            }
        }
        Commands::Stats { table } => {
            let words = read_lexicon(&table.input)?;
            let idx = table.build(&words)?;
            let cfg = idx.config();
            println!("words: {}", words.len());
            println!("distinct words: {}", idx.len());
            println!("ngram length: {}", cfg.ngram_length);
            println!("boundary: {:?}", cfg.boundary);
            println!("distinct ngrams: {}", idx.index().num_ngrams());
            println!("postings: {}", idx.index().num_postings());
        }
    }

    Ok(())
}
