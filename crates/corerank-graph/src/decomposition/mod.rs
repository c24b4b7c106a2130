//! Weighted k-core ("onion peeling") decomposition.

pub mod peeling;
pub mod types;

pub use peeling::decompose;
pub use types::CoreNumbers;
