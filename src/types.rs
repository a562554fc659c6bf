// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the matchers and the harness.
//!
//! Text is stored pre-decoded as `char`s. Offsets reported anywhere in this
//! crate are character offsets, so a Cyrillic corpus and an ASCII corpus
//! behave identically and slicing never lands inside a UTF-8 sequence.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::error::{MatchError, Result};

/// One document: a generated string or a single word from a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextUnit(Box<[char]>);

impl TextUnit {
    pub fn new(text: &str) -> Self {
        Self(text.chars().collect())
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TextUnit {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextUnit {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for TextUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Ordered collection of text units. Order fixes aggregation order only.
pub type Corpus = Vec<TextUnit>;

/// A non-empty search pattern.
///
/// Emptiness is checked once, here. Everything downstream that takes a
/// `&Pattern` can index `pattern[0]` and compute `len - 1` without guarding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Box<[char]>);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Self::from_chars(pattern.chars().collect())
    }

    pub fn from_chars(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(MatchError::InvalidPattern);
        }
        Ok(Self(chars.into_boxed_slice()))
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Validated fuzzy threshold.
///
/// Thresholds usually come from user input, so the public constructor takes a
/// signed value and rejects negatives with [`MatchError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct MaxDistance(usize);

impl MaxDistance {
    pub fn new(max_distance: i64) -> Result<Self> {
        usize::try_from(max_distance)
            .map(Self)
            .map_err(|_| MatchError::InvalidArgument { max_distance })
    }

    pub const fn from_usize(max_distance: usize) -> Self {
        Self(max_distance)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for MaxDistance {
    type Error = MatchError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

/// A window of text within the fuzzy threshold of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Character offset of the window start.
    pub position: usize,
    /// Edit distance between the window and the pattern. 0 for exact hits.
    pub distance: usize,
    /// The window itself.
    pub substring: String,
}

/// Aggregated outcome of one harness run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Wall-clock time around the whole corpus iteration.
    #[serde(rename = "elapsedMs", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub match_count: usize,
    /// Present only for strategies that report individual matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<MatchRecord>>,
}

impl BenchmarkResult {
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }
}

/// Fractional milliseconds, the unit reports are expressed in.
pub fn duration_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration_ms(*elapsed))
}
