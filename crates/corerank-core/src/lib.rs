//! # corerank-core
//!
//! Foundation crate for CoreRank keyword extraction.
//! Defines errors, config, tracing setup, constants, and shared collection types.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{CorerankConfig, ExtractionConfig, ExtractionParams, ShortfallPolicy};
pub use errors::{
    ConfigError, CorerankErrorCode, GraphError, HeapError, PipelineError, SelectionError,
};
