// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt: linear-time exact matching.
//!
//! The failure function (LPS table) records, for every prefix of the pattern,
//! how long its longest proper border is. On a mismatch the pattern cursor
//! falls back to that border instead of restarting, so the text cursor never
//! moves backwards.
//!
//! After a full match the cursor also falls back to the border rather than to
//! zero. That keeps overlapping occurrences in play: `"aa"` occurs three times
//! in `"aaaa"`, the same answer the brute-force scan gives. Resetting to zero
//! would report only disjoint occurrences and the two matchers would disagree.

use std::ops::Deref;

use crate::types::Pattern;

/// Longest-proper-prefix-that-is-also-suffix lengths.
///
/// `lps[i]` describes `pattern[0..=i]`. Always `lps[0] == 0` and `lps[i] <= i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpsTable(Box<[usize]>);

impl LpsTable {
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let mut lps = vec![0; pattern.len()];
        let mut len = 0;
        let mut i = 1;

        while i < pattern.len() {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                // Retry the same i against a shorter border
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Self(lps.into_boxed_slice())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for LpsTable {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// A KMP automaton bound to one pattern.
#[derive(Debug, Clone)]
pub struct KmpSearcher<'p> {
    pattern: &'p [char],
    lps: LpsTable,
}

impl<'p> KmpSearcher<'p> {
    pub fn new(pattern: &'p Pattern) -> Self {
        Self {
            pattern: pattern.chars(),
            lps: LpsTable::build(pattern.chars()),
        }
    }

    pub fn lps(&self) -> &LpsTable {
        &self.lps
    }

    /// Number of occurrences in `text`, overlaps included.
    pub fn count(&self, text: &[char]) -> usize {
        let mut count = 0;
        scan(text, self.pattern, &self.lps, |_| count += 1);
        count
    }

    /// Start offsets of every occurrence, in increasing order.
    pub fn find_all(&self, text: &[char]) -> Vec<usize> {
        let mut offsets = Vec::new();
        scan(text, self.pattern, &self.lps, |end| {
            offsets.push(end - self.pattern.len());
        });
        offsets
    }
}

/// Exact matcher that builds a fresh automaton per call.
///
/// Table construction is part of each measured call, so the harness compares
/// the same amount of work the brute-force matcher does per text unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KmpMatcher;

impl KmpMatcher {
    pub fn count(&self, text: &[char], pattern: &Pattern) -> usize {
        KmpSearcher::new(pattern).count(text)
    }
}

/// Overlap-aware KMP count for any comparable element type.
///
/// `pattern` must be non-empty.
pub fn kmp_count_overlapping<T: PartialEq>(text: &[T], pattern: &[T]) -> usize {
    debug_assert!(!pattern.is_empty());
    let lps = LpsTable::build(pattern);
    let mut count = 0;
    scan(text, pattern, &lps, |_| count += 1);
    count
}

/// Drive the automaton over `text`, calling `on_match` with the end offset
/// (exclusive) of every occurrence.
fn scan<T: PartialEq>(text: &[T], pattern: &[T], lps: &[usize], mut on_match: impl FnMut(usize)) {
    let m = pattern.len();
    let mut i = 0;
    let mut j = 0;

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                on_match(i);
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
}
