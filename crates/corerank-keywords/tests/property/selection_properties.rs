//! Property tests for corerank-keywords: monotone greedy improvement,
//! consistency of the reported quality, and determinism.

use proptest::prelude::*;

use corerank_core::errors::SelectionError;
use corerank_graph::{build_graph, decompose};
use corerank_keywords::{quality, select};

fn token_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["graph", "core", "rank", "word", "key", "node", "edge", "set"]),
        1..30,
    )
    .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn greedy_gains_are_positive_and_quality_grows(
        tokens in token_strategy(),
        window in 1usize..6,
        lambda in 0.0f64..3.0,
        k in 1usize..6,
    ) {
        let graph = build_graph(&tokens, window).unwrap();
        let cores = decompose(&graph).unwrap();

        match select(&tokens, &graph, &cores, lambda, k) {
            Ok(selection) => {
                prop_assert_eq!(selection.keywords.len(), k);
                let mut previous = 0.0;
                for round in &selection.rounds {
                    prop_assert!(round.gain > 0.0);
                    prop_assert!(round.quality >= previous);
                    previous = round.quality;
                }
                let recomputed = quality(
                    selection.keywords.iter().map(String::as_str),
                    &graph,
                    &cores,
                    lambda,
                ).unwrap();
                prop_assert!((recomputed - selection.quality()).abs() < 1e-6);
            }
            Err(SelectionError::NoPositiveGain { round, requested, selected }) => {
                prop_assert_eq!(requested, k);
                prop_assert!(round < k);
                prop_assert_eq!(selected.len(), round);
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    #[test]
    fn selection_is_deterministic(tokens in token_strategy(), window in 1usize..6) {
        let graph = build_graph(&tokens, window).unwrap();
        let cores = decompose(&graph).unwrap();
        let first = select(&tokens, &graph, &cores, 0.1, 2);
        let second = select(&tokens, &graph, &cores, 0.1, 2);
        prop_assert_eq!(first, second);
    }
}
