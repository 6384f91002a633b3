//! Core types for freqsum
//!
//! This module defines the data flowing through one summarization call:
//! tokens, sentences, the analyzed document, configuration, and the result.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Token
// ============================================================================

/// A token from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text and casing)
    pub text: String,
    /// Lowercased surface form, used for stopword tests
    pub lower: String,
    /// Byte offset (start) in original text
    pub start: usize,
    /// Byte offset (end) in original text
    pub end: usize,
    /// Sentence index this token belongs to
    pub sentence_idx: usize,
    /// Token index within the document
    pub token_idx: usize,
}

impl Token {
    /// Create a new token, deriving the lowercase form from `text`
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            text,
            lower,
            start,
            end,
            sentence_idx,
            token_idx,
        }
    }
}

// ============================================================================
// Sentence & Document
// ============================================================================

/// A sentence from the input text.
///
/// Identity is `index`: two sentences with the same text are still
/// different sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, verbatim from the source with outer whitespace trimmed
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Start token index (inclusive)
    pub start_token: usize,
    /// End token index (exclusive)
    pub end_token: usize,
}

impl Sentence {
    /// Create a new sentence with an empty token range
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            start_token: 0,
            end_token: 0,
        }
    }

    /// Number of tokens in this sentence
    pub fn token_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

/// An analyzed document: ordered sentences over one flat token list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
    pub tokens: Vec<Token>,
}

impl Document {
    /// Create a document from already-linked sentences and tokens
    pub fn new(sentences: Vec<Sentence>, tokens: Vec<Token>) -> Self {
        Self { sentences, tokens }
    }

    /// Number of sentences
    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }

    /// Number of tokens
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Tokens belonging to `sentence`
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        let end = sentence.end_token.min(self.tokens.len());
        let start = sentence.start_token.min(end);
        &self.tokens[start..end]
    }
}

// ============================================================================
// Scoring options
// ============================================================================

/// How frequency-table keys are derived from tokens.
///
/// Stopword exclusion is always case-insensitive. `Surface` keeps the
/// token's original casing as the key, so "Rust" and "rust" are counted
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCase {
    #[default]
    Surface,
    Lowercase,
}

impl KeyCase {
    /// The frequency-table key for `token`
    pub fn key<'a>(&self, token: &'a Token) -> &'a str {
        match self {
            KeyCase::Surface => &token.text,
            KeyCase::Lowercase => &token.lower,
        }
    }
}

/// Order in which selected sentences are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// Descending score, ties in first-seen order
    #[default]
    Rank,
    /// Source document order
    Document,
}

/// Word counting convention for the reported counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCount {
    /// Runs of non-whitespace; an empty string counts 0
    #[default]
    Whitespace,
    /// Pieces between single `' '` separators; an empty string counts 1
    SpaceSeparated,
}

impl WordCount {
    /// Count words in `text`
    pub fn count(&self, text: &str) -> usize {
        match self {
            WordCount::Whitespace => text.split_whitespace().count(),
            WordCount::SpaceSeparated => text.split(' ').count(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

fn default_ratio() -> f64 {
    0.3
}

fn default_language() -> String {
    "en".to_string()
}

/// Configuration for a [`Summarizer`](crate::Summarizer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Fraction of sentences kept in the summary, in (0, 1]
    #[serde(default = "default_ratio")]
    pub ratio: f64,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    #[serde(default = "default_language")]
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Frequency key casing
    #[serde(default)]
    pub key_case: KeyCase,
    /// Emission order of selected sentences
    #[serde(default)]
    pub order: SummaryOrder,
    /// Word counting convention
    #[serde(default)]
    pub word_count: WordCount,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: default_ratio(),
            language: default_language(),
            stopwords: Vec::new(),
            key_case: KeyCase::default(),
            order: SummaryOrder::default(),
            word_count: WordCount::default(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; absent fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(SummarizeError::invalid_config(format!(
                "ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizeError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set key casing
    pub fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.key_case = key_case;
        self
    }

    /// Builder method: set output order
    pub fn with_order(mut self, order: SummaryOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder method: set word counting convention
    pub fn with_word_count(mut self, word_count: WordCount) -> Self {
        self.word_count = word_count;
        self
    }
}

// ============================================================================
// Result
// ============================================================================

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Position of the sentence in the source document
    pub index: usize,
    /// Verbatim sentence text
    pub text: String,
    /// Accumulated frequency score
    pub score: f64,
}

/// Output of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences joined by a single space
    pub summary: String,
    /// Word count of the raw input
    pub original_word_count: usize,
    /// Word count of `summary`
    pub summary_word_count: usize,
    /// Number of sentences in the analyzed document
    pub sentence_count: usize,
    /// Selected sentences in emission order
    pub sentences: Vec<SelectedSentence>,
}

impl SummaryResult {
    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
