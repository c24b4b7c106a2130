//! One document line: tokens → graph → cores → keywords.

use corerank_core::config::ExtractionParams;
use corerank_core::errors::SelectionError;
use corerank_graph::{build_graph, decompose};

use crate::selection::{GreedySelector, Selection};

/// Split a line into tokens on Unicode whitespace. No normalization.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Run the full pipeline for one document and return the raw selection.
pub fn extract<S: AsRef<str>>(tokens: &[S], params: &ExtractionParams) -> Result<Selection, SelectionError> {
    let graph = build_graph(tokens, params.window_size)?;
    let cores = decompose(&graph)?;
    GreedySelector::new(&graph, &cores, params.lambda)?.select(tokens, params.keywords)
}

/// Extract keywords from one document, sorted ascending.
pub fn process_line<S: AsRef<str>>(tokens: &[S], params: &ExtractionParams) -> Result<Vec<String>, SelectionError> {
    Ok(extract(tokens, params)?.sorted_keywords())
}

/// Join keywords into one output line.
pub fn format_keywords<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
