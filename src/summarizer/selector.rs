//! Top-k sentence selection
//!
//! Keeps the `floor(sentence_count * ratio)` highest-scoring sentences.
//! Selection is a stable largest-k: sentences with exactly equal scores keep
//! their first-seen order. Results come out in descending score unless
//! document order is requested.

use super::scoring::ScoreTable;
use crate::types::{SummarizerConfig, SummaryOrder};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Fraction of the document's sentences to keep
    pub ratio: f64,
    /// Emission order of the selected sentences
    pub order: SummaryOrder,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            order: SummaryOrder::Rank,
        }
    }
}

impl From<&SummarizerConfig> for SelectorConfig {
    fn from(cfg: &SummarizerConfig) -> Self {
        Self {
            ratio: cfg.ratio,
            order: cfg.order,
        }
    }
}

/// Ratio-based top-k sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the fraction of sentences to keep
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.config.ratio = ratio;
        self
    }

    /// Set the emission order
    pub fn with_order(mut self, order: SummaryOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Number of sentences to keep for a document of `num_sentences`
    pub fn select_len(&self, num_sentences: usize) -> usize {
        (num_sentences as f64 * self.config.ratio).floor() as usize
    }

    /// Select (sentence index, score) pairs from `scores`.
    ///
    /// `num_sentences` counts every sentence in the document, scored or not.
    pub fn select(&self, scores: &ScoreTable, num_sentences: usize) -> Vec<(usize, f64)> {
        let k = self.select_len(num_sentences);
        let mut selected = nlargest(k, scores.scored());

        if self.config.order == SummaryOrder::Document {
            selected.sort_by_key(|&(index, _)| index);
        }

        selected
    }
}

/// The `k` largest items by score, descending; equal scores keep input order.
pub fn nlargest<I>(k: usize, items: I) -> Vec<(usize, f64)>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(usize, f64)> = items.into_iter().collect();
    // sort_by is stable, which is what gives first-seen tie-breaking
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(k);
    ranked
}
