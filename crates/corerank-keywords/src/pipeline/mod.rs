//! Per-line and per-document keyword extraction.

pub mod document;
pub mod line;

pub use document::{process_document, process_document_with, DocumentReport, LineOutput};
pub use line::{extract, format_keywords, process_line, tokenize};
