//! Summarization components
//!
//! Provides frequency-based extractive summarization: a normalized
//! word-frequency table, additive sentence scores, and ratio-based top-k
//! selection.

pub mod engine;
pub mod frequency;
pub mod scoring;
pub mod selector;
