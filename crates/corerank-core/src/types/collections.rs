//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for a vertex's neighbor list in sparse word graphs (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
