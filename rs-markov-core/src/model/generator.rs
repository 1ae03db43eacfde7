use log::{debug, warn};

use super::chains::Chains;
use super::generation_input::GenerationInput;
use super::selector::{RandomSelector, Selector};
use crate::error::{MarkovError, Result};
use crate::text;

/// Why a generation run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
	/// The current context has no successors in the model.
	DeadEnd,
	/// `GenerationInput::max_steps` words were appended.
	StepLimit { steps: usize },
}

/// Output of a generation run: the words in emission order and the
/// reason the walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
	words: Vec<String>,
	termination: Termination,
}

impl Generation {
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn into_words(self) -> Vec<String> {
		self.words
	}

	pub fn termination(&self) -> Termination {
		self.termination
	}

	/// `true` if the walk was cut short by the step limit.
	pub fn is_truncated(&self) -> bool {
		matches!(self.termination, Termination::StepLimit { .. })
	}

	/// Words joined with single spaces.
	pub fn text(&self) -> String {
		text::join(&self.words)
	}
}

/// Walks `Chains` to produce new text.
///
/// # Algorithm
/// - Pick a starting context uniformly among all keys; both of its words
///   start the output
/// - While the current context is a key, pick one of its successors
///   uniformly (duplicates weight the choice), append it, and shift the
///   context to `(second, picked)`
/// - Stop the first time the context is not a key, or when the optional
///   step limit is reached
///
/// The model is only read, so one `Chains` can serve many generators.
#[derive(Debug)]
pub struct Generator<S: Selector> {
	selector: S,
	input: GenerationInput,
}

impl Generator<RandomSelector<rand::rngs::ThreadRng>> {
	/// Unbounded generator drawing from the thread-local generator.
	pub fn thread() -> Self {
		Self::new(RandomSelector::thread())
	}
}

impl<S: Selector> Generator<S> {
	/// Creates an unbounded generator.
	pub fn new(selector: S) -> Self {
		Self::with_input(selector, GenerationInput::default())
	}

	pub fn with_input(selector: S, input: GenerationInput) -> Self {
		Self { selector, input }
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Generates one word sequence from `chains`.
	///
	/// # Returns
	/// - `Ok(Generation)` holding at least two words
	///
	/// # Errors
	/// - `MarkovError::EmptyModel` if `chains` has no context
	/// - `MarkovError::InvalidInput` if the configured step limit is 0
	/// - `MarkovError::SelectorOutOfRange` if the selector breaks its contract
	pub fn generate(&mut self, chains: &Chains) -> Result<Generation> {
		self.input.validate()?;
		if chains.is_empty() {
			return Err(MarkovError::EmptyModel);
		}

		let len = chains.len();
		let start = self.selector.select_index(len);
		let mut context = match chains.context_at(start) {
			Some(context) => context.clone(),
			None => return Err(MarkovError::SelectorOutOfRange { index: start, len }),
		};
		debug!("starting generation from \"{}\"", context);

		let mut words = vec![context.first().to_owned(), context.second().to_owned()];
		let mut steps = 0;

		while let Some(successors) = chains.successors(&context) {
			if let Some(max_steps) = self.input.max_steps() {
				if steps >= max_steps {
					warn!("generation stopped after {} steps without reaching a dead end", steps);
					return Ok(Generation {
						words,
						termination: Termination::StepLimit { steps },
					});
				}
			}

			// Successor lists are never empty
			let index = self.selector.select_index(successors.len());
			let next = match successors.get(index) {
				Some(word) => word.clone(),
				None => {
					return Err(MarkovError::SelectorOutOfRange {
						index,
						len: successors.len(),
					});
				}
			};
			words.push(next.clone());
			context = context.advance(next);
			steps += 1;
		}

		debug!("generated {} words", words.len());
		Ok(Generation {
			words,
			termination: Termination::DeadEnd,
		})
	}

	/// Generates one text, words joined with single spaces.
	pub fn generate_text(&mut self, chains: &Chains) -> Result<String> {
		Ok(self.generate(chains)?.text())
	}
}
