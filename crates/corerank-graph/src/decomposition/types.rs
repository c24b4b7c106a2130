//! Core numbers produced by a decomposition run.

use corerank_core::types::FxHashMap;

/// Generalized core number of every vertex, plus the order vertices were peeled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreNumbers {
    values: FxHashMap<String, f64>,
    removal_order: Vec<String>,
}

impl CoreNumbers {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            values: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            removal_order: Vec::with_capacity(n),
        }
    }

    pub(crate) fn assign(&mut self, word: &str, core: f64) {
        self.values.insert(word.to_string(), core);
        self.removal_order.push(word.to_string());
    }

    /// Core number of `word`, if it was part of the decomposed graph.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Words in the order they were peeled.
    pub fn removal_order(&self) -> &[String] {
        &self.removal_order
    }

    /// `(word, core)` pairs in peeling order.
    pub fn in_removal_order(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.removal_order
            .iter()
            .map(move |w| (w.as_str(), self.values.get(w).copied().unwrap_or(0.0)))
    }

    /// True when core numbers never decrease along the peeling order.
    pub fn is_monotone(&self) -> bool {
        let cores: Vec<f64> = self.in_removal_order().map(|(_, c)| c).collect();
        cores.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Largest core number, or 0 for an empty graph.
    pub fn max_core(&self) -> f64 {
        self.values.values().copied().fold(0.0, f64::max)
    }
}
