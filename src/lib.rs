//! # freqsum
//!
//! Extractive summarization by word frequency.
//!
//! Every non-stopword token is counted, counts are normalized by the most
//! frequent word, and each sentence scores the sum of its words' weights.
//! The top 30% of sentences (by default) form the summary, emitted in
//! descending score order.
//!
//! ## Quick Start
//!
//! ```rust
//! use freqsum::Summarizer;
//!
//! let text = "Rust is a systems language. Rust programs are fast. \
//!             Memory safety comes from the borrow checker. \
//!             The borrow checker makes Rust programs reliable.";
//!
//! let summarizer = Summarizer::new().unwrap();
//! let result = summarizer.summarize(text).unwrap();
//!
//! assert_eq!(result.sentences.len(), 1);
//! assert!(result.summary_word_count < result.original_word_count);
//! ```

pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

pub use errors::{Result, SummarizeError};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{Analyzer, UnicodeAnalyzer};
pub use summarizer::engine::Summarizer;
pub use summarizer::frequency::FrequencyTable;
pub use summarizer::scoring::ScoreTable;
pub use summarizer::selector::SentenceSelector;
pub use types::{
    Document, KeyCase, SelectedSentence, Sentence, SummarizerConfig, SummaryOrder, SummaryResult,
    Token, WordCount,
};

/// Summarize `text` with the default English configuration.
///
/// Builds a fresh [`Summarizer`]; callers summarizing many texts should
/// build one and reuse it.
pub fn summarize(text: &str) -> Result<SummaryResult> {
    Summarizer::new()?.summarize(text)
}
