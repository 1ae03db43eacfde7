use std::fmt;

/// An ordered pair of two consecutive words.
///
/// Equality and hashing are structural: two contexts are equal iff both
/// words match, in the same order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self {
			first: first.into(),
			second: second.into(),
		}
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Shifts the window by one word: `(a, b)` + `c` -> `(b, c)`.
	pub fn advance(self, next: impl Into<String>) -> Self {
		Self {
			first: self.second,
			second: next.into(),
		}
	}

	/// Consumes the context, returning both words in order.
	pub fn into_words(self) -> (String, String) {
		(self.first, self.second)
	}
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Context {
	fn from((first, second): (A, B)) -> Self {
		Self::new(first, second)
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.first, self.second)
	}
}
