//! Normalized word-frequency table
//!
//! Counts every non-excluded token and divides each count by the largest
//! one, so the most frequent key has weight exactly 1.0.

use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Document, KeyCase};
use rustc_hash::FxHashMap;

/// Key → normalized weight, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Maps keys to their position in `entries`
    index: FxHashMap<String, usize>,
    /// (key, weight) pairs in first-seen order
    entries: Vec<(String, f64)>,
    /// Largest raw count before normalization
    max_count: usize,
}

impl FrequencyTable {
    /// Build the table for `doc`.
    ///
    /// Exclusion tests the token's lowercase text; the key follows
    /// `key_case`. Fails with [`SummarizeError::NoScorableContent`] when
    /// every token is excluded.
    pub fn build(doc: &Document, filter: &StopwordFilter, key_case: KeyCase) -> Result<Self> {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for token in &doc.tokens {
            if filter.is_excluded(&token.lower) {
                continue;
            }
            let key = key_case.key(token);
            match index.get(key) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(key.to_string(), counts.len());
                    counts.push((key.to_string(), 1));
                }
            }
        }

        let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
        if max_count == 0 {
            return Err(SummarizeError::NoScorableContent);
        }

        let entries = counts
            .into_iter()
            .map(|(key, count)| (key, count as f64 / max_count as f64))
            .collect();

        Ok(Self {
            index,
            entries,
            max_count,
        })
    }

    /// Normalized weight for `key`, if it was counted
    pub fn weight(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Largest weight in the table (1.0 for any non-empty table)
    pub fn max_weight(&self) -> Option<f64> {
        self.entries.iter().map(|(_, w)| *w).reduce(f64::max)
    }

    /// Largest raw count seen before normalization
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Iterate over (key, weight) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, w)| (k.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::{Analyzer, UnicodeAnalyzer};

    fn table(text: &str, key_case: KeyCase) -> Result<FrequencyTable> {
        let doc = UnicodeAnalyzer.analyze(text).unwrap();
        let filter = StopwordFilter::from_list(&["the", "a", "an", "is"]);
        FrequencyTable::build(&doc, &filter, key_case)
    }

    #[test]
    fn test_normalization_max_is_one() {
        let t = table("Crab crab crab. Crab shell. The shell is hard.", KeyCase::Surface).unwrap();

        assert_eq!(t.max_weight(), Some(1.0));
        assert_eq!(t.max_count(), 2);
        // "crab" x2, "Crab" x2, "shell" x2, "hard" x1
        assert_eq!(t.weight("crab"), Some(1.0));
        assert_eq!(t.weight("Crab"), Some(1.0));
        assert_eq!(t.weight("shell"), Some(1.0));
        assert_eq!(t.weight("hard"), Some(0.5));
    }

    #[test]
    fn test_surface_keys_are_case_sensitive() {
        let t = table("Rust rust rust.", KeyCase::Surface).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.weight("rust"), Some(1.0));
        assert_eq!(t.weight("Rust"), Some(0.5));
    }

    #[test]
    fn test_lowercase_keys_merge_variants() {
        let t = table("Rust rust rust.", KeyCase::Lowercase).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.weight("rust"), Some(1.0));
        assert_eq!(t.weight("Rust"), None);
    }

    #[test]
    fn test_stopword_test_is_case_insensitive() {
        let t = table("The cargo. THE cargo.", KeyCase::Surface).unwrap();
        assert_eq!(t.weight("The"), None);
        assert_eq!(t.weight("THE"), None);
        assert_eq!(t.weight("cargo"), Some(1.0));
    }

    #[test]
    fn test_punctuation_is_excluded() {
        let t = table("Wow!!! Wow, wow.", KeyCase::Surface).unwrap();
        assert_eq!(t.weight("!"), None);
        assert_eq!(t.weight(","), None);
        assert_eq!(t.weight("."), None);
        assert_eq!(t.weight("Wow"), Some(1.0));
        assert_eq!(t.weight("wow"), Some(0.5));
    }

    #[test]
    fn test_only_stopwords_is_an_error() {
        let err = table("the a , . an", KeyCase::Surface).unwrap_err();
        assert!(matches!(err, SummarizeError::NoScorableContent));
    }

    #[test]
    fn test_first_seen_order() {
        let t = table("zeta alpha zeta mu.", KeyCase::Surface).unwrap();
        let keys: Vec<_> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mu"]);
    }
}
