//! Sentence and word segmentation
//!
//! [`UnicodeAnalyzer`] splits text with the UAX #29 sentence and word
//! boundary rules from `unicode-segmentation`. Whitespace never becomes a
//! token and whitespace-only sentences are dropped. A boundary right after a
//! known abbreviation ("Dr.", "Mr.", "e.g.") is merged back, since UAX #29
//! breaks there whenever the next word is capitalized.

use crate::errors::Result;
use crate::types::{Document, Sentence, Token};
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations (lowercase, final period removed) that never end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "sr", "jr", "mt", "rev", "gen", "col", "lt", "sgt",
    "capt", "hon", "vs", "etc", "e.g", "i.e", "inc", "ltd", "co", "no", "fig", "approx",
];

/// True when `segment` ends with one of [`ABBREVIATIONS`] followed by ".".
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(word) = segment.strip_suffix('.') else {
        return false;
    };
    let last = word
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(word)
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ABBREVIATIONS.contains(&last.as_str())
}

/// Linguistic analysis: raw text in, sentences and tokens out.
///
/// Implementations must be reentrant. One instance is built at startup and
/// shared read-only by every call.
pub trait Analyzer: Send + Sync {
    /// Segment `text` into a [`Document`], preserving order and casing.
    fn analyze(&self, text: &str) -> Result<Document>;
}

/// Rule-based analyzer over Unicode text segmentation
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeAnalyzer;

impl UnicodeAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one sentence slice, appending to `tokens`.
    fn tokenize_sentence(
        &self,
        sentence: &str,
        base_offset: usize,
        sentence_idx: usize,
        tokens: &mut Vec<Token>,
    ) {
        for (offset, word) in sentence.split_word_bound_indices() {
            if word.trim().is_empty() {
                continue;
            }
            let start = base_offset + offset;
            let token_idx = tokens.len();
            tokens.push(Token::new(
                word,
                start,
                start + word.len(),
                sentence_idx,
                token_idx,
            ));
        }
    }

    /// Byte spans of sentences, outer whitespace trimmed and abbreviation
    /// boundaries merged.
    fn sentence_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::new();

        for (offset, raw) in text.split_sentence_bound_indices() {
            let trimmed_start = raw.trim_start();
            let trimmed = trimmed_start.trim_end();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (raw.len() - trimmed_start.len());
            let end = start + trimmed.len();

            match spans.last_mut() {
                Some(prev) if ends_with_abbreviation(&text[prev.0..prev.1]) => prev.1 = end,
                _ => spans.push((start, end)),
            }
        }

        spans
    }
}

impl Analyzer for UnicodeAnalyzer {
    fn analyze(&self, text: &str) -> Result<Document> {
        let mut sentences = Vec::new();
        let mut tokens = Vec::new();

        for (start, end) in self.sentence_spans(text) {
            let index = sentences.len();
            let mut sentence = Sentence::new(&text[start..end], start, end, index);
            sentence.start_token = tokens.len();
            self.tokenize_sentence(&text[start..end], start, index, &mut tokens);
            sentence.end_token = tokens.len();
            sentences.push(sentence);
        }

        Ok(Document::new(sentences, tokens))
    }
}
