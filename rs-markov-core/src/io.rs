use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{MarkovError, Result};

/// Reads a whole corpus file into a single string.
///
/// # Errors
/// Returns `MarkovError::Io` carrying the path if the file cannot be opened
/// or is not valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| MarkovError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	debug!("read corpus {} ({} bytes)", path.display(), text.len());
	Ok(text)
}
