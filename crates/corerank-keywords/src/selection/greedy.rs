//! Greedy keyword selection: each round adds the word with the largest
//! strictly positive marginal gain in quality.

use std::collections::BTreeSet;
use std::iter;

use serde::Serialize;
use tracing::debug;

use corerank_core::errors::SelectionError;
use corerank_graph::{CoreNumbers, WordGraph};

use crate::scoring::KeywordScorer;

/// One completed selection round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionRound {
    pub word: String,
    pub gain: f64,
    /// Quality of the chosen set after this round.
    pub quality: f64,
}

/// Outcome of a successful selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub keywords: BTreeSet<String>,
    pub rounds: Vec<SelectionRound>,
}

impl Selection {
    /// Quality of the final keyword set.
    pub fn quality(&self) -> f64 {
        self.rounds.last().map(|r| r.quality).unwrap_or(0.0)
    }

    /// Keywords in ascending order.
    pub fn sorted_keywords(&self) -> Vec<String> {
        self.keywords.iter().cloned().collect()
    }
}

/// Greedy selector over one document's graph and cores.
#[derive(Debug)]
pub struct GreedySelector<'a> {
    scorer: KeywordScorer<'a>,
}

impl<'a> GreedySelector<'a> {
    pub fn new(graph: &'a WordGraph, cores: &CoreNumbers, lambda: f64) -> Result<Self, SelectionError> {
        Ok(Self {
            scorer: KeywordScorer::new(graph, cores, lambda)?,
        })
    }

    /// Select `k` keywords from the distinct words of `tokens`.
    ///
    /// Candidates are scanned in ascending order each round. The first word
    /// with the strictly greatest gain wins, provided that gain is > 0.
    /// A round with no positive gain fails with `NoPositiveGain` carrying
    /// the words chosen so far.
    pub fn select<S: AsRef<str>>(&self, tokens: &[S], k: usize) -> Result<Selection, SelectionError> {
        let mut candidates: BTreeSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut chosen: BTreeSet<&str> = BTreeSet::new();
        let mut rounds = Vec::with_capacity(k);
        let mut best_quality = 0.0;

        for round in 0..k {
            let mut best: Option<&str> = None;
            let mut max_gain = 0.0;
            for &word in &candidates {
                let quality = self
                    .scorer
                    .quality(chosen.iter().copied().chain(iter::once(word)))?;
                let gain = quality - best_quality;
                if gain > max_gain {
                    max_gain = gain;
                    best = Some(word);
                }
            }

            let Some(word) = best else {
                debug!(round, requested = k, chosen = chosen.len(), "no word with positive gain");
                return Err(SelectionError::NoPositiveGain {
                    round,
                    requested: k,
                    selected: chosen.iter().map(|w| w.to_string()).collect(),
                });
            };

            best_quality += max_gain;
            candidates.remove(word);
            chosen.insert(word);
            debug!(round, word, gain = max_gain, quality = best_quality, "selected keyword");
            rounds.push(SelectionRound {
                word: word.to_string(),
                gain: max_gain,
                quality: best_quality,
            });
        }

        Ok(Selection {
            keywords: chosen.into_iter().map(str::to_string).collect(),
            rounds,
        })
    }
}

/// Select `k` keywords for one document. See `GreedySelector::select`.
pub fn select<S: AsRef<str>>(
    tokens: &[S],
    graph: &WordGraph,
    cores: &CoreNumbers,
    lambda: f64,
    k: usize,
) -> Result<Selection, SelectionError> {
    GreedySelector::new(graph, cores, lambda)?.select(tokens, k)
}
