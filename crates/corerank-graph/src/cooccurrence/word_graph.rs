//! petgraph::StableGraph wrapper with WordNode and CooccurrenceEdge types.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Undirected;

use corerank_core::errors::GraphError;
use corerank_core::types::collections::{FxHashMap, FxHashSet, SmallVec8};

/// A vertex: one distinct word of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct WordNode {
    pub word: String,
    /// Sum of incident edge weights. Recomputed whenever incident edges change.
    pub strength: f64,
}

/// An undirected edge: how often two words fell in the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooccurrenceEdge {
    pub weight: u32,
}

/// Vertex and edge counts of an induced subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InducedSubgraph {
    pub vertex_count: usize,
    pub edge_count: usize,
}

impl InducedSubgraph {
    /// Number of vertex pairs without a direct edge.
    pub fn missing_edges(&self) -> usize {
        let n = self.vertex_count;
        if n < 2 {
            return 0;
        }
        (n * (n - 1) / 2).saturating_sub(self.edge_count)
    }
}

/// The underlying undirected graph type.
pub type WordStableGraph = StableGraph<WordNode, CooccurrenceEdge, Undirected>;

/// Simple undirected weighted graph of words with lookup by word.
///
/// Removing a vertex keeps every other `NodeIndex` valid, so a clone can be
/// peeled while indices still match the original.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// The petgraph stable graph.
    pub graph: WordStableGraph,
    /// Map from word → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<String, NodeIndex>,
}

impl WordGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the vertex for `word`.
    pub fn add_vertex(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(WordNode {
            word: word.to_string(),
            strength: 0.0,
        });
        self.node_index.insert(word.to_string(), idx);
        idx
    }

    /// Add vertices in iteration order. Existing words are left untouched.
    pub fn add_vertices<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_vertex(word.as_ref());
        }
    }

    /// Add `weight` co-occurrences between `a` and `b`.
    ///
    /// Both words must already be vertices. A repeated pair folds into the
    /// existing edge, so the graph never holds parallel edges.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u32) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop {
                word: a.to_string(),
            });
        }
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        match self.graph.find_edge(ia, ib) {
            Some(edge) => {
                if let Some(existing) = self.graph.edge_weight_mut(edge) {
                    existing.weight += weight;
                }
            }
            None => {
                self.graph.add_edge(ia, ib, CooccurrenceEdge { weight });
            }
        }
        self.refresh_strength(ia);
        self.refresh_strength(ib);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.node_index.contains_key(word)
    }

    pub fn index_of(&self, word: &str) -> Option<NodeIndex> {
        self.node_index.get(word).copied()
    }

    /// Word stored at `idx`, if the vertex is still present.
    pub fn word_at(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(|n| n.word.as_str())
    }

    /// Weight of the edge between `a` and `b`, if any.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let edge = self.graph.find_edge(ia, ib)?;
        self.graph.edge_weight(edge).map(|e| e.weight)
    }

    /// All `(word, strength)` pairs in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx))
            .map(|n| (n.word.as_str(), n.strength))
    }

    /// All edges as `(word, word, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.graph.edge_references().filter_map(move |e| {
            let a = self.word_at(e.source())?;
            let b = self.word_at(e.target())?;
            Some((a, b, e.weight().weight))
        })
    }

    /// Weighted degree of `word`.
    pub fn strength(&self, word: &str) -> Result<f64, GraphError> {
        let idx = self.require(word)?;
        Ok(self.strength_at(idx))
    }

    /// Stored strength of the vertex at `idx`; 0 for a removed vertex.
    pub fn strength_at(&self, idx: NodeIndex) -> f64 {
        self.graph.node_weight(idx).map(|n| n.strength).unwrap_or(0.0)
    }

    /// Weighted degree of `word`, ignoring edges to any word in `excluded`.
    pub fn strength_excluding(&self, word: &str, excluded: &[&str]) -> Result<f64, GraphError> {
        let idx = self.require(word)?;
        let skip: FxHashSet<NodeIndex> = excluded.iter().filter_map(|w| self.index_of(w)).collect();
        Ok(self
            .graph
            .edges(idx)
            .filter(|e| !skip.contains(&other_end(idx, e.source(), e.target())))
            .map(|e| f64::from(e.weight().weight))
            .sum())
    }

    /// Neighboring words of `word`.
    pub fn neighbors<'a>(&'a self, word: &str) -> Result<impl Iterator<Item = &'a str> + 'a, GraphError> {
        let idx = self.require(word)?;
        Ok(self
            .graph
            .neighbors(idx)
            .filter_map(move |nb| self.word_at(nb)))
    }

    /// Neighbor indices of the vertex at `idx`.
    pub fn neighbor_indices(&self, idx: NodeIndex) -> SmallVec8<NodeIndex> {
        self.graph.neighbors(idx).collect()
    }

    /// Delete `word` and its incident edges, refreshing former neighbors' strengths.
    pub fn remove_vertex(&mut self, word: &str) -> Result<(), GraphError> {
        let idx = self.require(word)?;
        self.remove_index(idx);
        Ok(())
    }

    /// Index-based form of `remove_vertex`. A removed or unknown index is ignored.
    pub fn remove_index(&mut self, idx: NodeIndex) {
        let neighbors = self.neighbor_indices(idx);
        if let Some(node) = self.graph.remove_node(idx) {
            self.node_index.remove(&node.word);
        }
        for nb in neighbors {
            self.refresh_strength(nb);
        }
    }

    /// Vertex and edge counts of the subgraph induced by `words`.
    /// Duplicate words count once.
    pub fn induced_subgraph<'w, I>(&self, words: I) -> Result<InducedSubgraph, GraphError>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut members: FxHashSet<NodeIndex> = FxHashSet::default();
        for word in words {
            members.insert(self.require(word)?);
        }
        let edge_count = members
            .iter()
            .map(|&v| {
                self.graph
                    .neighbors(v)
                    .filter(|nb| *nb > v && members.contains(nb))
                    .count()
            })
            .sum();
        Ok(InducedSubgraph {
            vertex_count: members.len(),
            edge_count,
        })
    }

    /// Sum incident edge weights of `idx` and store the result on the node.
    fn refresh_strength(&mut self, idx: NodeIndex) {
        let total: f64 = self
            .graph
            .edges(idx)
            .map(|e| f64::from(e.weight().weight))
            .sum();
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.strength = total;
        }
    }

    fn require(&self, word: &str) -> Result<NodeIndex, GraphError> {
        self.index_of(word).ok_or_else(|| GraphError::UnknownWord {
            word: word.to_string(),
        })
    }
}

/// The endpoint of an undirected edge that is not `from`.
fn other_end(from: NodeIndex, source: NodeIndex, target: NodeIndex) -> NodeIndex {
    if source == from {
        target
    } else {
        source
    }
}
