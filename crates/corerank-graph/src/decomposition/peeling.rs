//! Iterative weakest-first peeling over a private copy of the graph.

use tracing::debug;

use corerank_core::errors::GraphError;

use crate::cooccurrence::WordGraph;
use crate::heap::IndexedMinHeap;

use super::types::CoreNumbers;

/// Compute the generalized (weighted) core number of every vertex.
///
/// Repeatedly removes the vertex of least strength `s`, records `s` as its
/// core number, and lowers each remaining neighbor's key to
/// `max(s, strength after removal)`. The `max` keeps core numbers
/// non-decreasing in removal order.
///
/// `graph` is never mutated: peeling runs on a clone. Heap contract
/// violations surface as `GraphError::Heap`.
pub fn decompose(graph: &WordGraph) -> Result<CoreNumbers, GraphError> {
    let mut working = graph.clone();
    let mut heap = IndexedMinHeap::build(graph.vertices().map(|(word, strength)| (strength, word)))?;
    let mut cores = CoreNumbers::with_capacity(graph.vertex_count());

    while !heap.is_empty() {
        let (core, word) = heap.extract_min()?;
        let idx = working.index_of(word).ok_or_else(|| GraphError::UnknownWord {
            word: word.to_string(),
        })?;

        let neighbors = working.neighbor_indices(idx);
        working.remove_index(idx);

        for nb in neighbors {
            // Indices are shared with the original graph, which still holds every word.
            let Some(name) = graph.word_at(nb) else {
                continue;
            };
            let key = core.max(working.strength_at(nb));
            heap.decrease_key(&name, key)?;
        }

        cores.assign(word, core);
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        max_core = cores.max_core(),
        "core decomposition complete"
    );
    Ok(cores)
}
