//! Core-rank centrality and set-level keyword quality.

pub mod scorer;

pub use scorer::{core_rank, quality, KeywordScorer};
