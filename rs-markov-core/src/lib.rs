//! Second-order Markov chain text generation library.
//!
//! This crate provides a small word-level Markov generator including:
//! - Whitespace tokenization and single-space joining of words
//! - Order-2 chain construction (`(word1, word2)` -> successors)
//! - Random walks over the chains with an injectable selector
//! - Corpus loading from disk
//!
//! Typical flow:
//!
//! ```
//! use rs_markov_core::model::chain_builder::ChainBuilder;
//! use rs_markov_core::model::generator::Generator;
//! use rs_markov_core::model::selector::RandomSelector;
//!
//! let chains = ChainBuilder::from_text("hi there mary hi there juanita");
//! let mut generator = Generator::new(RandomSelector::seeded(7));
//! let generation = generator.generate(&chains).unwrap();
//! assert!(generation.words().len() >= 2);
//! ```

/// Chain model, builder and generation logic.
pub mod model;

/// Tokenization and joining helpers.
pub mod text;

/// Crate error type.
pub mod error;

/// Corpus loading.
pub mod io;

pub use error::{MarkovError, Result};
