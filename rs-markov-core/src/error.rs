use std::path::PathBuf;

/// Errors reported by the Markov generator.
///
/// Building chains never fails; errors come from generation on an empty
/// model, from invalid generation parameters, or from reading a corpus.
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	/// Generation was requested on chains without any context.
	#[error("cannot generate text from an empty model")]
	EmptyModel,

	/// An injected selector returned an index outside `0..len`.
	#[error("selector returned index {index} for {len} items")]
	SelectorOutOfRange { index: usize, len: usize },

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("failed to read corpus {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type Result<T> = std::result::Result<T, MarkovError>;
