use serde::Deserialize;

use crate::error::{MarkovError, Result};

/// Parameters controlling a generation run.
///
/// # Fields
/// - `max_steps`: maximum number of words appended after the two seed
///   words. `None` walks until a context without successors is reached,
///   which never happens on a corpus whose chain graph has no dead end
///   (e.g. `"a b a b a b"`).
///
/// Deserializable with defaults so it can be embedded in a config file:
///
/// ```
/// use rs_markov_core::model::generation_input::GenerationInput;
///
/// let input = GenerationInput::default().with_max_steps(100).unwrap();
/// assert_eq!(input.max_steps(), Some(100));
/// ```
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationInput {
	max_steps: Option<usize>,
}

impl GenerationInput {
	/// Unbounded generation.
	pub fn unbounded() -> Self {
		Self { max_steps: None }
	}

	pub fn max_steps(&self) -> Option<usize> {
		self.max_steps
	}

	/// Sets the step limit.
	///
	/// # Errors
	/// Returns an error if `max_steps` is 0: every walk appends at least
	/// one word when its seed context has successors.
	pub fn set_max_steps(&mut self, max_steps: usize) -> Result<()> {
		if max_steps == 0 {
			return Err(MarkovError::InvalidInput("max_steps must be >= 1".to_owned()));
		}
		self.max_steps = Some(max_steps);
		Ok(())
	}

	/// Builder form of `set_max_steps`.
	pub fn with_max_steps(mut self, max_steps: usize) -> Result<Self> {
		self.set_max_steps(max_steps)?;
		Ok(self)
	}

	/// Removes the step limit.
	pub fn clear_max_steps(&mut self) {
		self.max_steps = None;
	}

	/// Checks values that bypassed the setters (e.g. deserialized ones).
	pub fn validate(&self) -> Result<()> {
		if self.max_steps == Some(0) {
			return Err(MarkovError::InvalidInput("max_steps must be >= 1".to_owned()));
		}
		Ok(())
	}
}
