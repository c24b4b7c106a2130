//! Property tests for corerank-graph: graph simplicity, strength consistency,
//! heap correctness, and core monotonicity.

use std::collections::BTreeMap;

use proptest::prelude::*;

use corerank_graph::{build_graph, decompose, IndexedMinHeap};

// Small alphabet so that repeats and self-pairs are frequent.
fn token_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]), 0..40)
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

/// Brute-force co-occurrence counts: pairs at distance < window.
fn expected_weights(tokens: &[String], window: usize) -> BTreeMap<(String, String), u32> {
    let mut counts = BTreeMap::new();
    for i in 0..tokens.len() {
        for j in (i + 1)..tokens.len() {
            if j - i >= window || tokens[i] == tokens[j] {
                continue;
            }
            let (a, b) = if tokens[i] < tokens[j] {
                (tokens[i].clone(), tokens[j].clone())
            } else {
                (tokens[j].clone(), tokens[i].clone())
            };
            *counts.entry((a, b)).or_insert(0) += 1;
        }
    }
    counts
}

#[derive(Debug, Clone)]
enum HeapOp {
    Extract,
    Decrease(usize, f64),
}

fn heap_op_strategy() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        Just(HeapOp::Extract),
        (0usize..30, 0.0f64..50.0).prop_map(|(i, d)| HeapOp::Decrease(i, d)),
    ]
}

proptest! {
    #[test]
    fn graph_is_simple_with_exact_weights(tokens in token_strategy(), window in 1usize..7) {
        let graph = build_graph(&tokens, window).unwrap();
        let expected = expected_weights(&tokens, window);

        prop_assert_eq!(graph.edge_count(), expected.len());
        for (a, b, weight) in graph.edges() {
            prop_assert_ne!(a, b);
            let key = if a < b { (a.to_string(), b.to_string()) } else { (b.to_string(), a.to_string()) };
            prop_assert_eq!(expected.get(&key).copied(), Some(weight));
        }

        let mut distinct = tokens.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(graph.vertex_count(), distinct.len());
    }

    #[test]
    fn strength_matches_incident_weights(tokens in token_strategy(), window in 1usize..7, drop in 0usize..6) {
        let mut graph = build_graph(&tokens, window).unwrap();
        let victim = ["a", "b", "c", "d", "e", "f"][drop];
        if graph.contains(victim) {
            graph.remove_vertex(victim).unwrap();
        }

        let mut sums: BTreeMap<String, f64> = BTreeMap::new();
        for (a, b, weight) in graph.edges() {
            *sums.entry(a.to_string()).or_insert(0.0) += f64::from(weight);
            *sums.entry(b.to_string()).or_insert(0.0) += f64::from(weight);
        }
        for (word, strength) in graph.vertices() {
            prop_assert_eq!(strength, sums.get(word).copied().unwrap_or(0.0));
        }
    }

    #[test]
    fn cores_are_monotone_and_bounded(tokens in token_strategy(), window in 1usize..7) {
        let graph = build_graph(&tokens, window).unwrap();
        let cores = decompose(&graph).unwrap();

        prop_assert!(cores.is_monotone());
        prop_assert_eq!(cores.len(), graph.vertex_count());
        for (word, strength) in graph.vertices() {
            let core = cores.get(word).unwrap();
            prop_assert!(core >= 0.0);
            prop_assert!(core <= strength);
        }
        prop_assert_eq!(decompose(&graph).unwrap(), cores);
    }

    #[test]
    fn heap_matches_reference_model(
        keys in prop::collection::vec(0.0f64..100.0, 1..30),
        ops in prop::collection::vec(heap_op_strategy(), 0..60),
    ) {
        let mut heap = IndexedMinHeap::build(keys.iter().copied().zip(0usize..)).unwrap();
        let mut model: BTreeMap<usize, f64> = keys.iter().copied().enumerate().collect();

        for op in ops {
            match op {
                HeapOp::Extract => {
                    let result = heap.extract_min();
                    if model.is_empty() {
                        prop_assert!(result.is_err());
                        continue;
                    }
                    let (key, element) = result.unwrap();
                    let min = model.values().copied().fold(f64::INFINITY, f64::min);
                    prop_assert_eq!(key, min);
                    prop_assert_eq!(model.remove(&element), Some(key));
                }
                HeapOp::Decrease(element, delta) => {
                    if let Some(current) = model.get_mut(&element) {
                        let lowered = *current - delta;
                        heap.decrease_key(&element, lowered).unwrap();
                        *current = lowered;
                    } else {
                        prop_assert!(heap.decrease_key(&element, 0.0).is_err());
                    }
                }
            }
            prop_assert!(heap.check_invariants());
            prop_assert_eq!(heap.len(), model.len());
        }
    }
}
