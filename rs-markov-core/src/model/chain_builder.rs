use log::debug;

use super::chains::Chains;
use super::context::Context;
use crate::text::tokenize;

/// Builds order-2 `Chains` from a corpus.
///
/// For every window of three consecutive tokens `(w0, w1, w2)`, `w2` is
/// appended to the successor list of `(w0, w1)`. The final word pair of the
/// corpus has no successor and therefore never becomes a key.
///
/// Building is total: fewer than three tokens simply yield an empty model.
/// Each call works on a private `Chains` and returns it fully formed, so
/// independent corpora can be built from several threads.
pub struct ChainBuilder;

impl ChainBuilder {
	/// Builds chains from an ordered token sequence.
	pub fn build<S: AsRef<str>>(tokens: &[S]) -> Chains {
		let mut chains = Chains::new();

		for window in tokens.windows(3) {
			let context = Context::new(window[0].as_ref(), window[1].as_ref());
			chains.push(context, window[2].as_ref().to_owned());
		}

		debug!(
			"built chains from {} tokens: {} contexts, {} transitions",
			tokens.len(),
			chains.len(),
			chains.transition_count()
		);
		chains
	}

	/// Tokenizes `text` on whitespace, then builds chains from the tokens.
	pub fn from_text(text: &str) -> Chains {
		Self::build(&tokenize(text))
	}
}
