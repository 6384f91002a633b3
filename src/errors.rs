//! Error types for freqsum
//!
//! Every failure the engine can report is a variant of [`SummarizeError`].
//! Per-call failures (`EmptyInput`, `NoScorableContent`) are distinct from
//! construction-time failures (`AnalyzerUnavailable`, `InvalidConfig`) so a
//! caller can refuse to start instead of failing every request.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors produced while building or running a summarizer
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The input text was empty or contained only whitespace
    #[error("input text is empty")]
    EmptyInput,

    /// Every token was a stopword or punctuation, so nothing can be scored
    #[error("input contains no scorable words (only stopwords and punctuation)")]
    NoScorableContent,

    /// The linguistic analyzer or its stopword reference could not be built
    #[error("analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummarizeError {
    /// Build an [`SummarizeError::InvalidConfig`] from any message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SummarizeError::InvalidConfig(msg.into())
    }

    /// Build an [`SummarizeError::AnalyzerUnavailable`] from any message
    pub fn analyzer_unavailable(msg: impl Into<String>) -> Self {
        SummarizeError::AnalyzerUnavailable(msg.into())
    }

    /// Whether this error is raised while constructing the engine rather
    /// than by a single bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SummarizeError::AnalyzerUnavailable(_)
                | SummarizeError::InvalidConfig(_)
                | SummarizeError::Config(_)
                | SummarizeError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(SummarizeError::EmptyInput.to_string(), "input text is empty");
        assert_eq!(
            SummarizeError::invalid_config("ratio must be > 0").to_string(),
            "invalid configuration: ratio must be > 0"
        );
        assert_eq!(
            SummarizeError::analyzer_unavailable("no stopwords for 'xx'").to_string(),
            "analyzer unavailable: no stopwords for 'xx'"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(!SummarizeError::EmptyInput.is_fatal());
        assert!(!SummarizeError::NoScorableContent.is_fatal());
        assert!(SummarizeError::analyzer_unavailable("x").is_fatal());
        assert!(SummarizeError::invalid_config("x").is_fatal());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SummarizeError = err.into();
        assert!(matches!(err, SummarizeError::Config(_)));
    }
}
