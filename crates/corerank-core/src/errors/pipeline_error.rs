//! Document pipeline errors.

use super::error_code::{self, CorerankErrorCode};
use super::{ConfigError, GraphError, SelectionError};

/// Errors that can occur while processing a document.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Selection error on line {line}: {source}")]
    Selection {
        line: usize,
        #[source]
        source: SelectionError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CorerankErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Selection { source, .. } => source.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

impl PipelineError {
    /// Attach a 1-based line number to a selection error.
    pub fn selection(line: usize, source: SelectionError) -> Self {
        Self::Selection { line, source }
    }

    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
