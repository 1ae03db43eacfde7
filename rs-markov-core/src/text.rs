/// Splits a text into tokens on runs of whitespace.
///
/// - Leading, trailing and repeated whitespace is ignored
/// - Never yields empty tokens
/// - Token order follows the input
pub fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace().map(str::to_owned).collect()
}

/// Joins words with a single space.
pub fn join<S: AsRef<str>>(words: &[S]) -> String {
	words.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ")
}
