mod args;
mod config;

use clap::Parser;
use log::{info, warn};

use rs_markov_core::io::read_corpus;
use rs_markov_core::model::chain_builder::ChainBuilder;
use rs_markov_core::model::chains::Chains;
use rs_markov_core::model::generator::Generator;
use rs_markov_core::model::selector::{RandomSelector, Selector};

use crate::args::Args;
use crate::config::{Config, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config)?;

    // Open the file and turn it into one long string
    let text = read_corpus(&settings.corpus)?;

    // Get a Markov chain
    let chains = ChainBuilder::from_text(&text);
    info!(
        "{}: {} contexts, {} transitions",
        settings.corpus.display(),
        chains.len(),
        chains.transition_count()
    );

    match settings.seed {
        Some(seed) => print_texts(
            Generator::with_input(RandomSelector::seeded(seed), settings.input),
            &chains,
            settings.count,
        ),
        None => print_texts(
            Generator::with_input(RandomSelector::thread(), settings.input),
            &chains,
            settings.count,
        ),
    }
}

/// Produces `count` texts and prints each one on its own line.
fn print_texts<S: Selector>(
    mut generator: Generator<S>,
    chains: &Chains,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    for i in 0..count {
        let generation = generator.generate(chains)?;
        if generation.is_truncated() {
            warn!(
                "text {} truncated at {} words (step limit reached)",
                i + 1,
                generation.words().len()
            );
        }
        println!("{}", generation.text());
    }
    Ok(())
}
