// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact and approximate substring matching, and a harness to time them.
//!
//! Three strategies answer "where does this pattern occur?":
//!
//! - **Naive**: slide a window, compare, count. O(n·m).
//! - **KMP**: the same counts in O(n+m), via a failure function.
//! - **Fuzzy**: windows of pattern width within a Levenshtein threshold.
//!
//! The harness runs any of them over a corpus and reports elapsed time and
//! match counts; a suite sweeps corpus sizes and shapes the output for a
//! chart.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   bench/     │────▶│  matcher.rs  │
//! │ (random,    │     │ (run, Suite, │     │  (Matcher,   │
//! │  words)     │     │  Report)     │     │   Outcome)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                              ┌───────────────────┴───────┐
//!                              ▼                           ▼
//!                      ┌──────────────┐           ┌──────────────┐
//!                      │   exact/     │           │   fuzzy/     │
//!                      │ (naive, kmp) │           │ (windows,    │
//!                      │              │           │  levenshtein)│
//!                      └──────────────┘           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use needle::bench::{run, RunConfig};
//! use needle::{KmpMatcher, NaiveMatcher, Pattern, TextUnit};
//!
//! let corpus: Vec<TextUnit> = ["aaaa", "baab"].into_iter().map(TextUnit::from).collect();
//! let config = RunConfig::new(Pattern::new("aa").unwrap(), &corpus);
//!
//! let naive = run(&NaiveMatcher, &config).unwrap();
//! let kmp = run(&KmpMatcher, &config).unwrap();
//! assert_eq!(naive.match_count, 4);
//! assert_eq!(naive.match_count, kmp.match_count);
//! ```

pub mod bench;
pub mod config;
pub mod corpus;
pub mod error;
pub mod exact;
pub mod fuzzy;
pub mod matcher;
mod types;

pub mod testing;

pub use error::{ConfigError, CorpusError, MatchError, Result};
pub use exact::{kmp_count, naive_count, KmpMatcher, KmpSearcher, LpsTable, NaiveMatcher};
pub use fuzzy::{distance, distance_within, fuzzy_search, levenshtein, EditDistance, FuzzyMatcher};
pub use matcher::{Matcher, Outcome, Strategy};
pub use types::{
    duration_ms, BenchmarkResult, Corpus, MatchRecord, MaxDistance, Pattern, TextUnit,
};
