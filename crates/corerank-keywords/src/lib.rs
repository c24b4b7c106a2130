//! # corerank-keywords
//!
//! Keyword side of CoreRank: core-rank scoring, the cohesion-penalized
//! quality function, greedy selection, and the per-line pipeline that ties
//! graph building, decomposition, and selection together.

pub mod pipeline;
pub mod scoring;
pub mod selection;

pub use pipeline::{
    extract, format_keywords, process_document, process_document_with, process_line, tokenize,
    DocumentReport, LineOutput,
};
pub use scoring::{core_rank, quality, KeywordScorer};
pub use selection::{select, GreedySelector, Selection, SelectionRound};
