//! Shared data structure aliases.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
