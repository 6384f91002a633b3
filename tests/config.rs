//! Loading summarizer configuration from JSON files.

use std::io::Write;

use freqsum::{KeyCase, SummarizeError, Summarizer, SummarizerConfig, SummaryOrder};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config(
        r#"{
            "ratio": 0.5,
            "language": "en",
            "stopwords": ["wombats"],
            "key_case": "lowercase",
            "order": "document"
        }"#,
    );

    let cfg = SummarizerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(cfg.ratio, 0.5);
    assert_eq!(cfg.key_case, KeyCase::Lowercase);
    assert_eq!(cfg.order, SummaryOrder::Document);

    let s = Summarizer::with_config(cfg).unwrap();
    assert!(s.stopword_filter().is_stopword("wombats"));
    assert!(s.stopword_filter().is_stopword("the"));
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config(r#"{"ratio": 0.4}"#);
    let cfg = SummarizerConfig::from_json_file(file.path()).unwrap();

    assert_eq!(cfg.ratio, 0.4);
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.key_case, KeyCase::Surface);
}

#[test]
fn test_malformed_config() {
    let file = write_config("{ratio: ");
    let err = SummarizerConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, SummarizeError::Config(_)));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SummarizerConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SummarizeError::Io(_)));
}

#[test]
fn test_unsupported_language_refuses_to_start() {
    let file = write_config(r#"{"language": "tlh"}"#);
    let cfg = SummarizerConfig::from_json_file(file.path()).unwrap();

    let err = Summarizer::with_config(cfg).unwrap_err();
    assert!(matches!(err, SummarizeError::AnalyzerUnavailable(_)));
    assert!(err.is_fatal());
}
