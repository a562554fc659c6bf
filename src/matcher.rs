// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The capability the harness drives: evaluate a pattern against one text.
//!
//! Exact and fuzzy strategies return different shapes (a count versus a list
//! of matches), so evaluation yields an [`Outcome`] that covers both. A new
//! strategy only has to implement [`Matcher`]; the harness never changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exact::{KmpMatcher, NaiveMatcher};
use crate::fuzzy::{search_windows, FuzzyMatcher};
use crate::types::{MatchRecord, MaxDistance, Pattern};

/// What one evaluation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exact strategies only count.
    Count(usize),
    /// Fuzzy strategies report each match.
    Matches(Vec<MatchRecord>),
}

impl Outcome {
    pub fn count(&self) -> usize {
        match self {
            Outcome::Count(n) => *n,
            Outcome::Matches(matches) => matches.len(),
        }
    }
}

/// Evaluate a pattern against one text unit.
///
/// `max_distance` is advisory: exact strategies ignore it, fuzzy strategies
/// fall back to their own threshold when it is `None`.
pub trait Matcher {
    /// Short name used in logs and report labels.
    fn label(&self) -> &str;

    fn evaluate(
        &self,
        text: &[char],
        pattern: &Pattern,
        max_distance: Option<MaxDistance>,
    ) -> Result<Outcome>;
}

impl Matcher for NaiveMatcher {
    fn label(&self) -> &str {
        "naive"
    }

    fn evaluate(&self, text: &[char], pattern: &Pattern, _: Option<MaxDistance>) -> Result<Outcome> {
        Ok(Outcome::Count(self.count(text, pattern)))
    }
}

impl Matcher for KmpMatcher {
    fn label(&self) -> &str {
        "kmp"
    }

    fn evaluate(&self, text: &[char], pattern: &Pattern, _: Option<MaxDistance>) -> Result<Outcome> {
        Ok(Outcome::Count(self.count(text, pattern)))
    }
}

impl Matcher for FuzzyMatcher {
    fn label(&self) -> &str {
        "fuzzy"
    }

    fn evaluate(
        &self,
        text: &[char],
        pattern: &Pattern,
        max_distance: Option<MaxDistance>,
    ) -> Result<Outcome> {
        let max_distance = max_distance.unwrap_or(self.max_distance());
        Ok(Outcome::Matches(search_windows(text, pattern, max_distance)))
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn evaluate(
        &self,
        text: &[char],
        pattern: &Pattern,
        max_distance: Option<MaxDistance>,
    ) -> Result<Outcome> {
        (**self).evaluate(text, pattern, max_distance)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn evaluate(
        &self,
        text: &[char],
        pattern: &Pattern,
        max_distance: Option<MaxDistance>,
    ) -> Result<Outcome> {
        (**self).evaluate(text, pattern, max_distance)
    }
}

/// Adapter turning a closure into a [`Matcher`].
pub struct FnMatcher<F> {
    label: String,
    f: F,
}

impl<F> Matcher for FnMatcher<F>
where
    F: Fn(&[char], &Pattern, Option<MaxDistance>) -> Result<Outcome>,
{
    fn label(&self) -> &str {
        &self.label
    }

    fn evaluate(
        &self,
        text: &[char],
        pattern: &Pattern,
        max_distance: Option<MaxDistance>,
    ) -> Result<Outcome> {
        (self.f)(text, pattern, max_distance)
    }
}

pub fn from_fn<F>(label: impl Into<String>, f: F) -> FnMatcher<F>
where
    F: Fn(&[char], &Pattern, Option<MaxDistance>) -> Result<Outcome>,
{
    FnMatcher {
        label: label.into(),
        f,
    }
}

/// Built-in strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Naive,
    Kmp,
    Fuzzy,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Kmp, Strategy::Fuzzy];

    /// Instantiate the strategy. `max_distance` only matters for `Fuzzy`.
    pub fn matcher(self, max_distance: MaxDistance) -> Box<dyn Matcher + Send + Sync> {
        match self {
            Strategy::Naive => Box::new(NaiveMatcher),
            Strategy::Kmp => Box::new(KmpMatcher),
            Strategy::Fuzzy => Box::new(FuzzyMatcher::with_max_distance(max_distance)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Kmp => "kmp",
            Strategy::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "brute" | "brute-force" => Ok(Strategy::Naive),
            "kmp" => Ok(Strategy::Kmp),
            "fuzzy" | "levenshtein" => Ok(Strategy::Fuzzy),
            other => Err(format!("unknown strategy '{}' (expected naive, kmp, or fuzzy)", other)),
        }
    }
}
