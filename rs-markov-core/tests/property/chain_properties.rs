use std::collections::HashMap;

use proptest::prelude::*;
use rs_markov_core::model::chain_builder::ChainBuilder;
use rs_markov_core::model::context::Context;

fn corpus(max_len: usize) -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..max_len)
		.prop_map(|words| words.into_iter().map(str::to_owned).collect())
}

/// Index-by-index reference construction.
fn expected_chains(tokens: &[String]) -> HashMap<Context, Vec<String>> {
	let mut expected: HashMap<Context, Vec<String>> = HashMap::new();
	if tokens.len() >= 3 {
		for i in 0..=tokens.len() - 3 {
			expected
				.entry(Context::new(tokens[i].as_str(), tokens[i + 1].as_str()))
				.or_default()
				.push(tokens[i + 2].clone());
		}
	}
	expected
}

proptest! {
	#[test]
	fn every_window_is_recorded_in_order(tokens in corpus(60)) {
		let chains = ChainBuilder::build(&tokens);
		let expected = expected_chains(&tokens);

		prop_assert_eq!(chains.len(), expected.len());
		for (context, successors) in &expected {
			prop_assert_eq!(chains.successors(context), Some(successors.as_slice()));
		}
		prop_assert_eq!(chains.transition_count(), tokens.len().saturating_sub(2));
	}

	#[test]
	fn short_corpora_are_empty(tokens in corpus(3)) {
		prop_assert!(ChainBuilder::build(&tokens).is_empty());
	}

	#[test]
	fn build_is_deterministic(tokens in corpus(60)) {
		let first = ChainBuilder::build(&tokens);
		let second = ChainBuilder::build(&tokens);
		prop_assert_eq!(&first, &second);
		let order_first: Vec<_> = first.contexts().collect();
		let order_second: Vec<_> = second.contexts().collect();
		prop_assert_eq!(order_first, order_second);
	}

	#[test]
	fn from_text_matches_build_on_tokens(tokens in corpus(40), sep in "[ \t\n]{1,3}") {
		let text = tokens.join(sep.as_str());
		prop_assert_eq!(ChainBuilder::from_text(&text), ChainBuilder::build(&tokens));
	}
}

#[test]
fn last_pair_is_never_a_key_when_unique() {
	let chains = ChainBuilder::from_text("hi there mary hi there juanita");
	assert!(!chains.contains(&Context::new("there", "juanita")));
	let keys: Vec<String> = chains.contexts().map(ToString::to_string).collect();
	assert_eq!(keys, vec!["hi there", "there mary", "mary hi"]);
}
