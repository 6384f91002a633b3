//! Summarization engine: runs the four phases over one input.
//!
//! 1. Analyze text into sentences and tokens
//! 2. Build the normalized frequency table
//! 3. Score sentences
//! 4. Select the top fraction and assemble the summary
//!
//! A [`Summarizer`] owns only immutable state (analyzer, stopword filter,
//! config) and can be shared across threads. Every call builds and drops its
//! own tables.

use std::sync::Arc;

use rayon::prelude::*;

use super::frequency::FrequencyTable;
use super::scoring::ScoreTable;
use super::selector::{SelectorConfig, SentenceSelector};
use crate::errors::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Analyzer, UnicodeAnalyzer};
use crate::types::{Document, SelectedSentence, SummarizerConfig, SummaryResult};

pub const STAGE_ANALYZE: &str = "analyze";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Enter a tracing span for an engine stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Frequency-based extractive summarizer
#[derive(Clone)]
pub struct Summarizer {
    analyzer: Arc<dyn Analyzer>,
    filter: StopwordFilter,
    selector: SentenceSelector,
    config: SummarizerConfig,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("stopwords", &self.filter.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Summarizer {
    /// Create a summarizer with the default English configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer using the built-in [`UnicodeAnalyzer`]
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        Self::with_analyzer(config, Arc::new(UnicodeAnalyzer::new()))
    }

    /// Create a summarizer around an existing analyzer.
    ///
    /// Validates `config` and loads the stopword list for its language;
    /// both failures surface here rather than on each call.
    pub fn with_analyzer(config: SummarizerConfig, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        config.validate()?;

        let mut filter = StopwordFilter::for_language(&config.language)?;
        filter.add_stopwords(&config.stopwords);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            language = %config.language,
            stopwords = filter.len(),
            ratio = config.ratio,
            "summarizer ready"
        );

        Ok(Self {
            analyzer,
            filter,
            selector: SentenceSelector::with_config(SelectorConfig::from(&config)),
            config,
        })
    }

    /// Replace the language stopword list with `filter`.
    ///
    /// The extra words from [`SummarizerConfig::stopwords`] are added to
    /// `filter`, so they stay excluded after the swap.
    pub fn with_stopword_filter(mut self, mut filter: StopwordFilter) -> Self {
        filter.add_stopwords(&self.config.stopwords);
        self.filter = filter;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// The active stopword reference
    pub fn stopword_filter(&self) -> &StopwordFilter {
        &self.filter
    }

    /// Run linguistic analysis only
    pub fn analyze(&self, text: &str) -> Result<Document> {
        self.analyzer.analyze(text)
    }

    /// Build the frequency table for an analyzed document
    pub fn frequency_table(&self, doc: &Document) -> Result<FrequencyTable> {
        FrequencyTable::build(doc, &self.filter, self.config.key_case)
    }

    /// Score every sentence of an analyzed document
    pub fn score_table(&self, doc: &Document, freq: &FrequencyTable) -> ScoreTable {
        ScoreTable::build(doc, freq, self.config.key_case)
    }

    /// Summarize `raw_text`.
    ///
    /// Fails with [`SummarizeError::EmptyInput`] for empty or whitespace-only
    /// text and [`SummarizeError::NoScorableContent`] when every token is a
    /// stopword or punctuation.
    pub fn summarize(&self, raw_text: &str) -> Result<SummaryResult> {
        if raw_text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        trace_stage!(STAGE_ANALYZE);
        let doc = self.analyzer.analyze(raw_text)?;

        trace_stage!(STAGE_FREQUENCY);
        let freq = self.frequency_table(&doc)?;

        trace_stage!(STAGE_SCORE);
        let scores = self.score_table(&doc, &freq);

        trace_stage!(STAGE_SELECT);
        let picked = self.selector.select(&scores, doc.num_sentences());

        let sentences: Vec<SelectedSentence> = picked
            .into_iter()
            .map(|(index, score)| SelectedSentence {
                index,
                text: doc.sentences[index].text.clone(),
                score,
            })
            .collect();

        let summary = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = doc.num_sentences(),
            tokens = doc.num_tokens(),
            vocabulary = freq.len(),
            scored = scores.scored_count(),
            selected = sentences.len(),
            "summarized"
        );

        let counter = self.config.word_count;
        Ok(SummaryResult {
            original_word_count: counter.count(raw_text),
            summary_word_count: counter.count(&summary),
            summary,
            sentence_count: doc.num_sentences(),
            sentences,
        })
    }

    /// Summarize many independent texts in parallel.
    ///
    /// Results are in input order; one failure does not affect the others.
    pub fn summarize_batch(&self, texts: &[&str]) -> Vec<Result<SummaryResult>> {
        texts.par_iter().map(|text| self.summarize(text)).collect()
    }
}
