// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brute-force scan. O(n·m) worst case, zero setup.

use crate::types::Pattern;

/// Window-by-window exact matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveMatcher;

impl NaiveMatcher {
    pub fn count(&self, text: &[char], pattern: &Pattern) -> usize {
        count_overlapping(text, pattern.chars())
    }
}

/// Count every offset where `pattern` occurs, overlaps included.
///
/// The window advances by exactly one position whether or not it matched,
/// so `"aaaa"` contains `"aa"` three times. `pattern` must be non-empty.
pub fn count_overlapping<T: PartialEq>(text: &[T], pattern: &[T]) -> usize {
    debug_assert!(!pattern.is_empty());
    text.windows(pattern.len())
        .filter(|window| *window == pattern)
        .count()
}

/// Start offsets of every occurrence, overlaps included.
pub fn find_overlapping<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    debug_assert!(!pattern.is_empty());
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(offset, _)| offset)
        .collect()
}
