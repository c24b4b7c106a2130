//! Weighted word co-occurrence graph and its sliding-window builder.

pub mod builder;
pub mod word_graph;

pub use builder::{build_graph, CoOccurrenceGraphBuilder};
pub use word_graph::{CooccurrenceEdge, InducedSubgraph, WordGraph, WordNode};
