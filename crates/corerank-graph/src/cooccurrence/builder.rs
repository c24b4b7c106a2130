//! Sliding-window graph-of-words builder.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use corerank_core::errors::GraphError;

use super::word_graph::WordGraph;

/// Builds a `WordGraph` from a token sequence using a fixed window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoOccurrenceGraphBuilder {
    window_size: usize,
}

impl CoOccurrenceGraphBuilder {
    /// Create a builder. `window_size` must be at least 1.
    pub fn new(window_size: usize) -> Result<Self, GraphError> {
        if window_size == 0 {
            return Err(GraphError::InvalidWindow { window_size });
        }
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Build the co-occurrence graph of `tokens`.
    ///
    /// The first window counts every pair of positions inside it. Each later
    /// window (one position further) counts only the pairs formed by its newest
    /// token and the `window_size - 1` tokens before it. Windows longer than
    /// the document are clipped to it. Self-pairs are skipped.
    pub fn build<S: AsRef<str>>(&self, tokens: &[S]) -> Result<WordGraph, GraphError> {
        let words: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let window = self.window_size.min(words.len());

        let mut counts: BTreeMap<(&str, &str), u32> = BTreeMap::new();
        for i in 0..window {
            for j in (i + 1)..window {
                record_pair(&mut counts, words[i], words[j]);
            }
        }
        for newest in window..words.len() {
            for earlier in (newest + 1 - window)..newest {
                record_pair(&mut counts, words[earlier], words[newest]);
            }
        }

        let mut graph = WordGraph::new();
        let vocabulary: BTreeSet<&str> = words.iter().copied().collect();
        graph.add_vertices(vocabulary.iter().copied());
        for ((a, b), weight) in counts {
            graph.add_edge(a, b, weight)?;
        }

        debug!(
            tokens = words.len(),
            window = self.window_size,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );
        Ok(graph)
    }
}

/// Count one co-occurrence of an unordered pair, keyed `(smaller, larger)`.
fn record_pair<'a>(counts: &mut BTreeMap<(&'a str, &'a str), u32>, a: &'a str, b: &'a str) {
    if a == b {
        return;
    }
    let key = if a < b { (a, b) } else { (b, a) };
    *counts.entry(key).or_insert(0) += 1;
}

/// Build the co-occurrence graph of `tokens` with the given window size.
pub fn build_graph<S: AsRef<str>>(tokens: &[S], window_size: usize) -> Result<WordGraph, GraphError> {
    CoOccurrenceGraphBuilder::new(window_size)?.build(tokens)
}
