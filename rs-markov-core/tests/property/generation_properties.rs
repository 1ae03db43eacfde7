use proptest::prelude::*;
use rs_markov_core::MarkovError;
use rs_markov_core::model::chain_builder::ChainBuilder;
use rs_markov_core::model::chains::Chains;
use rs_markov_core::model::context::Context;
use rs_markov_core::model::generation_input::GenerationInput;
use rs_markov_core::model::generator::{Generator, Termination};
use rs_markov_core::model::selector::{RandomSelector, Selector};

fn corpus() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 3..50)
		.prop_map(|words| words.into_iter().map(str::to_owned).collect())
}

fn bounded(max_steps: usize) -> GenerationInput {
	GenerationInput::default().with_max_steps(max_steps).unwrap()
}

proptest! {
	#[test]
	fn every_step_follows_the_model(tokens in corpus(), seed in any::<u64>()) {
		let chains = ChainBuilder::build(&tokens);
		let mut generator = Generator::with_input(RandomSelector::seeded(seed), bounded(200));
		let generation = generator.generate(&chains).unwrap();
		let words = generation.words();

		prop_assert!(words.len() >= 2);
		prop_assert!(chains.contains(&Context::new(words[0].as_str(), words[1].as_str())));
		for window in words.windows(3) {
			let successors = chains.successors(&Context::new(window[0].as_str(), window[1].as_str()));
			prop_assert!(successors.is_some_and(|list| list.contains(&window[2])));
		}

		let last = Context::new(words[words.len() - 2].as_str(), words[words.len() - 1].as_str());
		match generation.termination() {
			Termination::DeadEnd => prop_assert!(!chains.contains(&last)),
			Termination::StepLimit { steps } => {
				prop_assert_eq!(steps, 200);
				prop_assert_eq!(words.len(), 202);
				prop_assert!(chains.contains(&last));
			}
		}
	}

	#[test]
	fn same_seed_same_text(tokens in corpus(), seed in any::<u64>()) {
		let chains = ChainBuilder::build(&tokens);
		let a = Generator::with_input(RandomSelector::seeded(seed), bounded(100)).generate(&chains).unwrap();
		let b = Generator::with_input(RandomSelector::seeded(seed), bounded(100)).generate(&chains).unwrap();
		prop_assert_eq!(a, b);
	}
}

#[test]
fn empty_model_fails() {
	let mut generator = Generator::thread();
	assert!(matches!(generator.generate(&Chains::new()), Err(MarkovError::EmptyModel)));
	assert!(matches!(generator.generate(&ChainBuilder::from_text("too short")), Err(MarkovError::EmptyModel)));
}

#[test]
fn hi_there_walks_end_on_juanita() {
	let chains = ChainBuilder::from_text("hi there mary hi there juanita");
	for seed in 0..50 {
		let generation = Generator::new(RandomSelector::seeded(seed)).generate(&chains).unwrap();
		assert_eq!(generation.termination(), Termination::DeadEnd);
		let words = generation.words();
		assert_eq!(&words[words.len() - 2..], ["there", "juanita"]);
	}
}

#[test]
fn cyclic_corpus_hits_the_step_limit_deterministically() {
	let chains = ChainBuilder::from_text("a b a b a b");
	for seed in 0..20 {
		let generation = Generator::with_input(RandomSelector::seeded(seed), bounded(1_000))
			.generate(&chains)
			.unwrap();
		assert_eq!(generation.termination(), Termination::StepLimit { steps: 1_000 });
		assert_eq!(generation.words().len(), 1_002);
		assert!(generation.is_truncated());
	}
}

#[test]
fn successor_frequency_follows_multiplicity() {
	// ("x","y") is followed by "p" three times and "q" once
	let chains = ChainBuilder::from_text("x y p x y p x y p x y q");
	let mut selector = RandomSelector::seeded(11);
	let successors = chains.successors(&Context::new("x", "y")).unwrap();
	let mut p = 0;
	for _ in 0..4_000 {
		if selector.select(successors).map(String::as_str) == Some("p") {
			p += 1;
		}
	}
	assert!((2_700..3_300).contains(&p), "p picked {p} times");
}

#[test]
fn shared_model_across_threads() {
	let chains = ChainBuilder::from_text("one fish two fish red fish blue fish one fish");
	std::thread::scope(|scope| {
		for seed in 0..4 {
			let chains = &chains;
			scope.spawn(move || {
				let mut generator = Generator::with_input(RandomSelector::seeded(seed), bounded(500));
				assert!(generator.generate(chains).unwrap().words().len() >= 2);
			});
		}
	});
}
