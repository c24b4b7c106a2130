//! Greedy forward selection of keywords.

pub mod greedy;

pub use greedy::{select, GreedySelector, Selection, SelectionRound};
