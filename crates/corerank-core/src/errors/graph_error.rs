//! Word graph errors.

use super::error_code::{self, CorerankErrorCode};
use super::HeapError;

/// Errors that can occur while building, decomposing, or scoring a word graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("window size must be at least 1, got {window_size}")]
    InvalidWindow { window_size: usize },

    #[error("word not in graph: {word}")]
    UnknownWord { word: String },

    #[error("edge endpoints must differ: {word}")]
    SelfLoop { word: String },

    #[error("heap contract violated: {0}")]
    Heap(#[from] HeapError),
}

impl CorerankErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Heap(e) => e.error_code(),
            _ => error_code::GRAPH_ERROR,
        }
    }
}
