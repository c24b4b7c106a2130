//! # corerank-graph
//!
//! Graph side of CoreRank: the weighted word co-occurrence graph, the
//! indexed min-heap used for peeling, and the weighted k-core decomposition.

pub mod cooccurrence;
pub mod decomposition;
pub mod heap;

pub use cooccurrence::{build_graph, CoOccurrenceGraphBuilder, InducedSubgraph, WordGraph};
pub use decomposition::{decompose, CoreNumbers};
pub use heap::IndexedMinHeap;
