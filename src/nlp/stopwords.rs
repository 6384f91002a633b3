//! Stopword and punctuation reference
//!
//! Stopword lists come from the `stop-words` crate. Punctuation is the fixed
//! ASCII punctuation set; only single-symbol tokens are treated as
//! punctuation.

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Languages with a built-in stopword list
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "pl",
    "ar",
];

/// A fixed set of words and symbols excluded from frequency scoring
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Punctuation symbols
    punctuation: FxHashSet<char>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::with_words(Self::builtin(LANGUAGE::English))
    }
}

impl StopwordFilter {
    /// Create a filter for the given language.
    ///
    /// Fails with [`SummarizeError::AnalyzerUnavailable`] when no list exists
    /// for `language`.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = Self::resolve_language(language).ok_or_else(|| {
            SummarizeError::analyzer_unavailable(format!(
                "no stopword list for language '{language}' (supported: {})",
                SUPPORTED_LANGUAGES.join(", ")
            ))
        })?;
        Ok(Self::with_words(Self::builtin(lang)))
    }

    /// Create a filter with no stopwords; punctuation is still excluded
    pub fn empty() -> Self {
        Self::with_words(FxHashSet::default())
    }

    /// Create a filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::with_words(words.iter().map(|w| w.to_lowercase()).collect())
    }

    fn with_words(stopwords: FxHashSet<String>) -> Self {
        Self {
            stopwords,
            punctuation: Self::ascii_punctuation(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if an already-lowercased word is a stopword
    pub fn is_stopword(&self, lowercase_word: &str) -> bool {
        self.stopwords.contains(lowercase_word)
    }

    /// Check if `symbol` is a single punctuation character
    pub fn is_punctuation(&self, symbol: &str) -> bool {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.punctuation.contains(&c),
            _ => false,
        }
    }

    /// Whether a token with this lowercase text is excluded from scoring
    pub fn is_excluded(&self, lowercase_word: &str) -> bool {
        self.is_stopword(lowercase_word) || self.is_punctuation(lowercase_word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter has no stopwords
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn resolve_language(language: &str) -> Option<LANGUAGE> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }

    fn builtin(lang: LANGUAGE) -> FxHashSet<String> {
        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }

    /// `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`
    fn ascii_punctuation() -> FxHashSet<char> {
        (0u8..=127)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .collect()
    }
}
