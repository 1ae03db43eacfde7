use std::path::PathBuf;

use clap::Parser;

/// Generate random text from a second-order Markov chain built on a text file.
#[derive(Parser, Debug)]
#[command(name = "rs-markov")]
#[command(version)]
#[command(about = "Generate Markov text from text files")]
pub struct Args {
    /// Corpus file (default: green-eggs.txt)
    pub corpus: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of words appended after the starting pair
    #[arg(short, long)]
    pub max_steps: Option<usize>,

    /// Walk until a dead end, without any step limit
    #[arg(long, conflicts_with = "max_steps")]
    pub unbounded: bool,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of texts to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}
