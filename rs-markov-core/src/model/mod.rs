//! Top-level module for the Markov chain generation system.
//!
//! This module provides an order-2 word-level Markov generator, including:
//! - Word-pair lookup keys (`Context`)
//! - The context -> successors mapping (`Chains`)
//! - Chain construction from a token sequence (`ChainBuilder`)
//! - Injectable uniform selection (`Selector`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk itself (`Generator`)

/// Ordered pair of consecutive words used as a lookup key.
pub mod context;

/// Mapping from a `Context` to the words observed after it.
///
/// Read-only outside of the crate; only `ChainBuilder` fills it.
pub mod chains;

/// Builds `Chains` from a token sequence or raw text.
pub mod chain_builder;

/// Uniform random selection, injectable for reproducible generation.
pub mod selector;

/// Generation parameters such as the optional step limit.
pub mod generation_input;

/// Random walk over `Chains` producing a word sequence.
pub mod generator;
