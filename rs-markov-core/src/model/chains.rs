use std::collections::HashMap;

use super::context::Context;

/// The Markov model: each `Context` maps to the words that followed it.
///
/// Successor lists keep corpus order and duplicates, so a word seen `k`
/// times after a context is `k` times more likely to be picked.
///
/// Contexts also remember the order in which they were first observed.
/// Hash map iteration order changes between processes, so indexing keys
/// through that order keeps seeded generation reproducible.
///
/// # Invariants
/// - Every successor list is non-empty
/// - `order` holds each key of `successors` exactly once
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chains {
	/// Context -> successors, in observation order.
	successors: HashMap<Context, Vec<String>>,
	/// Contexts in first-seen order.
	order: Vec<Context>,
}

impl Chains {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `next` as a successor of `context`.
	///
	/// Only `ChainBuilder` mutates a model; outside the crate it is read-only.
	pub(crate) fn push(&mut self, context: Context, next: String) {
		if let Some(list) = self.successors.get_mut(&context) {
			list.push(next);
			return;
		}
		self.order.push(context.clone());
		self.successors.insert(context, vec![next]);
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Total number of observed transitions (sum of all successor lists).
	pub fn transition_count(&self) -> usize {
		self.successors.values().map(Vec::len).sum()
	}

	pub fn contains(&self, context: &Context) -> bool {
		self.successors.contains_key(context)
	}

	/// Successors observed after `context`, or `None` if it is not a key.
	pub fn successors(&self, context: &Context) -> Option<&[String]> {
		self.successors.get(context).map(Vec::as_slice)
	}

	/// Iterates over contexts in first-seen order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.order.iter()
	}

	/// Returns the context at `index` in first-seen order.
	pub fn context_at(&self, index: usize) -> Option<&Context> {
		self.order.get(index)
	}

	/// Iterates over `(context, successors)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&Context, &[String])> {
		self.order
			.iter()
			.filter_map(|context| self.successors(context).map(|list| (context, list)))
	}
}
