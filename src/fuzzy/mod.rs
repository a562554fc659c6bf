// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: fixed-width windows within an edit distance of the pattern.
//!
//! The scan slides a window exactly `|pattern|` characters wide across the
//! text and keeps every window whose Levenshtein distance to the pattern is
//! within the threshold. Results come out in increasing offset order.
//!
//! # Window width limitation
//!
//! The distance computation handles insertions and deletions, but the window
//! never changes width. A match whose true alignment is longer or shorter than
//! the pattern (say, the text has one extra character in the middle) is only
//! found if some same-width window happens to fall within the threshold. With
//! pattern `abcd` and text `abXcd`, the windows are `abXc` and `bXcd`, both at
//! distance 2, so a threshold of 1 finds nothing even though the text is one
//! insertion away. This is the intended behavior of the scan.

mod levenshtein;

pub use levenshtein::*;

use crate::error::Result;
use crate::types::{MatchRecord, MaxDistance, Pattern};

/// Approximate matcher bound to a default threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatcher {
    max_distance: MaxDistance,
}

impl FuzzyMatcher {
    pub fn new(max_distance: i64) -> Result<Self> {
        Ok(Self {
            max_distance: MaxDistance::new(max_distance)?,
        })
    }

    pub const fn with_max_distance(max_distance: MaxDistance) -> Self {
        Self { max_distance }
    }

    pub const fn max_distance(&self) -> MaxDistance {
        self.max_distance
    }

    /// Search with this matcher's own threshold.
    pub fn search(&self, text: &[char], pattern: &Pattern) -> Vec<MatchRecord> {
        search_windows(text, pattern, self.max_distance)
    }
}

/// Every window of `text` within `max_distance` edits of `pattern`.
///
/// Fails with `InvalidPattern` on an empty pattern, then with
/// `InvalidArgument` on a negative threshold. Nothing is scanned on failure.
pub fn fuzzy_search(text: &[char], pattern: &[char], max_distance: i64) -> Result<Vec<MatchRecord>> {
    let pattern = Pattern::from_chars(pattern.to_vec())?;
    let max_distance = MaxDistance::new(max_distance)?;
    Ok(search_windows(text, &pattern, max_distance))
}

/// The window scan over validated inputs.
pub fn search_windows(text: &[char], pattern: &Pattern, max_distance: MaxDistance) -> Vec<MatchRecord> {
    let needle = pattern.chars();
    let mut scratch = EditDistance::with_capacity(needle.len());

    text.windows(needle.len())
        .enumerate()
        .filter_map(|(position, window)| {
            scratch
                .distance_within(window, needle, max_distance.get())
                .map(|distance| MatchRecord {
                    position,
                    distance,
                    substring: window.iter().collect(),
                })
        })
        .collect()
}
