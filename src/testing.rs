//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Corpus, Pattern, TextUnit};

/// Decode a string into the `char` slice form the matchers take.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Build a corpus from string literals, one unit each.
pub fn make_corpus(units: &[&str]) -> Corpus {
    units.iter().map(|unit| TextUnit::from(*unit)).collect()
}

/// Build a pattern, panicking on empty input.
pub fn make_pattern(pattern: &str) -> Pattern {
    Pattern::new(pattern).expect("test pattern must be non-empty")
}

/// Every start offset where `pattern` occurs in `text`, by direct comparison.
pub fn exact_offsets(text: &[char], pattern: &[char]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == *pattern)
        .collect()
}
