//! Indexed heap errors.
//!
//! These signal violated heap contracts. Callers are expected to
//! propagate them, never to recover from them.

use super::error_code::{self, CorerankErrorCode};

/// Errors raised by `IndexedMinHeap` operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeapError {
    #[error("extract-min called on an empty heap")]
    EmptyHeap,

    #[error("new key {new} is greater than current key {current} for {element}")]
    InvalidKey {
        element: String,
        current: f64,
        new: f64,
    },

    #[error("element {element} is not held by the heap")]
    MissingElement { element: String },

    #[error("element {element} appears more than once")]
    DuplicateElement { element: String },
}

impl CorerankErrorCode for HeapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyHeap => error_code::EMPTY_HEAP,
            Self::InvalidKey { .. } => error_code::INVALID_KEY,
            Self::MissingElement { .. } | Self::DuplicateElement { .. } => error_code::HEAP_ERROR,
        }
    }
}
