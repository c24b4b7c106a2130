//! Keyword scoring over the original (undecomposed) graph.

use std::collections::BTreeSet;

use corerank_core::errors::GraphError;
use corerank_core::types::FxHashMap;
use corerank_graph::{CoreNumbers, WordGraph};

/// Sum of the core numbers of `word`'s neighbors in `graph`.
///
/// `graph` must be the full graph the cores were computed from, not a
/// peeled copy.
pub fn core_rank(word: &str, graph: &WordGraph, cores: &CoreNumbers) -> Result<f64, GraphError> {
    let mut total = 0.0;
    for neighbor in graph.neighbors(word)? {
        total += cores.get(neighbor).ok_or_else(|| GraphError::UnknownWord {
            word: neighbor.to_string(),
        })?;
    }
    Ok(total)
}

/// Quality of a keyword set: total core-rank minus `lambda` times the number
/// of keyword pairs that share no edge. Duplicate words count once.
pub fn quality<'w, I>(
    keywords: I,
    graph: &WordGraph,
    cores: &CoreNumbers,
    lambda: f64,
) -> Result<f64, GraphError>
where
    I: IntoIterator<Item = &'w str>,
{
    let set: BTreeSet<&str> = keywords.into_iter().collect();
    let mut score = 0.0;
    for &word in &set {
        score += core_rank(word, graph, cores)?;
    }
    let missing = graph.induced_subgraph(set.iter().copied())?.missing_edges();
    Ok(score - lambda * missing as f64)
}

/// Scores keyword sets against one document's graph and cores.
///
/// Core-ranks are computed once up front; the graph and cores are only read.
#[derive(Debug)]
pub struct KeywordScorer<'a> {
    graph: &'a WordGraph,
    lambda: f64,
    ranks: FxHashMap<&'a str, f64>,
}

impl<'a> KeywordScorer<'a> {
    pub fn new(graph: &'a WordGraph, cores: &CoreNumbers, lambda: f64) -> Result<Self, GraphError> {
        let mut ranks = FxHashMap::with_capacity_and_hasher(graph.vertex_count(), Default::default());
        for (word, _) in graph.vertices() {
            ranks.insert(word, core_rank(word, graph, cores)?);
        }
        Ok(Self {
            graph,
            lambda,
            ranks,
        })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Cached core-rank of `word`.
    pub fn core_rank(&self, word: &str) -> Result<f64, GraphError> {
        self.ranks
            .get(word)
            .copied()
            .ok_or_else(|| GraphError::UnknownWord {
                word: word.to_string(),
            })
    }

    /// Same value as the free `quality` function, using cached core-ranks.
    pub fn quality<'w, I>(&self, keywords: I) -> Result<f64, GraphError>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let set: BTreeSet<&str> = keywords.into_iter().collect();
        let mut score = 0.0;
        for &word in &set {
            score += self.core_rank(word)?;
        }
        let missing = self.graph.induced_subgraph(set.iter().copied())?.missing_edges();
        Ok(score - self.lambda * missing as f64)
    }
}
