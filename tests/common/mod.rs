//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use needle::bench::{run, RunConfig};
use needle::{BenchmarkResult, Matcher, TextUnit};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from needle::testing
pub use needle::testing::{chars, exact_offsets, make_corpus, make_pattern};

// ============================================================================
// FIXTURES
// ============================================================================

/// A short passage with repeated and near-miss occurrences of "война".
pub const WAR_AND_PEACE: &str = "война и мир. Война началась, воина не было, \
    а война шла дальше. войн много, вайна одна.";

/// Words with shared prefixes, so KMP actually falls back.
pub const PREFIX_HEAVY: &[&str] = &["abab", "ababab", "aab", "abaab", "ba", "", "ababa"];

/// Write `contents` to a temp file that lives as long as the handle.
pub fn text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

// ============================================================================
// HARNESS SHORTCUTS
// ============================================================================

/// Run `matcher` over string units with `pattern`.
pub fn run_over(matcher: &dyn Matcher, pattern: &str, units: &[&str]) -> BenchmarkResult {
    let corpus = make_corpus(units);
    run(matcher, &RunConfig::new(make_pattern(pattern), &corpus)).expect("harness run failed")
}

/// Total exact occurrences across a corpus, by direct comparison.
pub fn oracle_corpus_count(corpus: &[TextUnit], pattern: &str) -> usize {
    let pattern = chars(pattern);
    corpus
        .iter()
        .map(|unit| exact_offsets(unit.chars(), &pattern).len())
        .sum()
}
