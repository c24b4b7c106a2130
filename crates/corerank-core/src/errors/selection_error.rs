//! Keyword selection errors.

use super::error_code::{self, CorerankErrorCode};
use super::GraphError;

/// Errors that can occur during greedy keyword selection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// No remaining word strictly improves quality. Expected for short or
    /// degenerate documents. `selected` holds the words chosen in earlier rounds.
    #[error("no word with positive gain in round {round} of {requested}")]
    NoPositiveGain {
        round: usize,
        requested: usize,
        selected: Vec<String>,
    },

    #[error("graph error during selection: {0}")]
    Graph(#[from] GraphError),
}

impl CorerankErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPositiveGain { .. } => error_code::NO_POSITIVE_GAIN,
            Self::Graph(e) => e.error_code(),
        }
    }
}

impl SelectionError {
    /// True for the expected per-document shortfall, false for contract violations.
    pub fn is_shortfall(&self) -> bool {
        matches!(self, Self::NoPositiveGain { .. })
    }
}
