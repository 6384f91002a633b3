//! Sentence scoring
//!
//! A sentence's score is the sum of the frequency weights of its tokens.
//! Sentences with no weighted token stay unscored (`None`) and can never be
//! selected; this is different from a score of zero.

use super::frequency::FrequencyTable;
use crate::types::{Document, KeyCase};

/// Per-sentence scores addressed by sentence index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    scores: Vec<Option<f64>>,
}

impl ScoreTable {
    /// Score every sentence of `doc` against `freq`
    pub fn build(doc: &Document, freq: &FrequencyTable, key_case: KeyCase) -> Self {
        let scores = doc
            .sentences
            .iter()
            .map(|sentence| {
                doc.sentence_tokens(sentence)
                    .iter()
                    .filter_map(|token| freq.weight(key_case.key(token)))
                    .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |s| s + w)))
            })
            .collect();

        Self { scores }
    }

    /// Build directly from per-sentence scores
    pub fn from_scores(scores: Vec<Option<f64>>) -> Self {
        Self { scores }
    }

    /// Score of sentence `index`, `None` if unscored or out of range
    pub fn score(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied().flatten()
    }

    /// Scored sentences as (index, score) in first-seen order
    pub fn scored(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|s| (i, s)))
    }

    /// Number of sentences that received a score
    pub fn scored_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// Number of sentences covered, scored or not
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::{Analyzer, UnicodeAnalyzer};

    fn scores(text: &str) -> ScoreTable {
        let doc = UnicodeAnalyzer.analyze(text).unwrap();
        let filter = StopwordFilter::from_list(&["the", "is", "it"]);
        let freq = FrequencyTable::build(&doc, &filter, KeyCase::Surface).unwrap();
        ScoreTable::build(&doc, &freq, KeyCase::Surface)
    }

    #[test]
    fn test_scores_sum_weights() {
        // weights: crab = 1.0 (x4), shell = 0.5 (x2)
        let table = scores("crab crab crab crab shell. The shell.");

        assert_eq!(table.len(), 2);
        assert_eq!(table.score(0), Some(4.5));
        assert_eq!(table.score(1), Some(0.5));
    }

    #[test]
    fn test_unscored_sentence_is_none() {
        let table = scores("Ferris swims. It is. Ferris sleeps.");

        assert!(table.score(0).is_some());
        assert_eq!(table.score(1), None);
        assert!(table.score(2).is_some());
        assert_eq!(table.scored_count(), 2);
        let indices: Vec<_> = table.scored().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_out_of_range_is_none() {
        let table = scores("crab.");
        assert_eq!(table.score(5), None);
    }
}
