use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform selection among the elements of a non-empty sequence.
///
/// `Generator` draws every random choice through this trait, so tests can
/// plug in a scripted selector and production code a seeded one.
pub trait Selector {
	/// Returns an index in `0..len`, each with equal probability.
	///
	/// Callers guarantee `len > 0`.
	fn select_index(&mut self, len: usize) -> usize;

	/// Picks one element of `items`, or `None` if it is empty.
	fn select<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
	where
		Self: Sized,
	{
		if items.is_empty() {
			return None;
		}
		let index = self.select_index(items.len());
		items.get(index)
	}
}

impl<S: Selector + ?Sized> Selector for &mut S {
	fn select_index(&mut self, len: usize) -> usize {
		(**self).select_index(len)
	}
}

/// `Selector` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSelector<R: Rng> {
	rng: R,
}

impl<R: Rng> RandomSelector<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RandomSelector<ThreadRng> {
	/// Selector using the thread-local generator.
	pub fn thread() -> Self {
		Self::new(rand::rng())
	}
}

impl RandomSelector<StdRng> {
	/// Owned `StdRng` seeded once from the thread-local generator.
	///
	/// Unlike `thread()`, the result is `Send` and can move to another thread.
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_rng(&mut rand::rng()))
	}

	/// Reproducible selector: the same seed yields the same choices.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Selector for RandomSelector<R> {
	fn select_index(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}
}
