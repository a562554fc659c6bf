// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance over `char` sequences.
//!
//! Unit cost for insertion, deletion, and substitution. The textbook table is
//! `(|a|+1) × (|b|+1)`, but each row only reads the row above it, so we keep a
//! single row and carry the diagonal in a local. That row lives in
//! [`EditDistance`] and is reused across calls: the fuzzy matcher computes one
//! distance per text window, and allocating a fresh table per window would
//! dominate the cost being measured.
//!
//! Two entry points:
//! - [`EditDistance::distance`]: the exact distance, always.
//! - [`EditDistance::distance_within`]: the exact distance if it is `<= max`,
//!   `None` otherwise, with early exits when the answer is already known.

/// Reusable scratch space for edit distance computations.
#[derive(Debug, Clone, Default)]
pub struct EditDistance {
    row: Vec<usize>,
}

impl EditDistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the row for patterns of `len` characters.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            row: Vec::with_capacity(len + 1),
        }
    }

    /// Minimum number of single-character edits turning `a` into `b`.
    ///
    /// Empty input is fine: the distance is the other side's length.
    pub fn distance(&mut self, a: &[char], b: &[char]) -> usize {
        let row = self.reset(b.len());

        for (i, &ac) in a.iter().enumerate() {
            // row[j] holds dp[i][j] on entry; overwrite left to right with dp[i+1][j]
            let mut diag = row[0];
            row[0] = i + 1;
            for (j, &bc) in b.iter().enumerate() {
                let up = row[j + 1];
                row[j + 1] = if ac == bc {
                    diag
                } else {
                    1 + up.min(row[j]).min(diag)
                };
                diag = up;
            }
        }

        row[b.len()]
    }

    /// Edit distance if it is at most `max`, otherwise `None`.
    ///
    /// Two early exits, both sound:
    /// 1. `||a| - |b||` is a lower bound on the distance.
    /// 2. Row minima never decrease, so once every cell in a row exceeds
    ///    `max` the final cell will too.
    ///
    /// Whenever the true distance is `<= max` the returned value equals
    /// [`EditDistance::distance`].
    pub fn distance_within(&mut self, a: &[char], b: &[char], max: usize) -> Option<usize> {
        if a.len().abs_diff(b.len()) > max {
            return None;
        }

        let row = self.reset(b.len());

        for (i, &ac) in a.iter().enumerate() {
            let mut diag = row[0];
            row[0] = i + 1;
            let mut min_row = row[0];
            for (j, &bc) in b.iter().enumerate() {
                let up = row[j + 1];
                row[j + 1] = if ac == bc {
                    diag
                } else {
                    1 + up.min(row[j]).min(diag)
                };
                diag = up;
                min_row = min_row.min(row[j + 1]);
            }

            if min_row > max {
                return None;
            }
        }

        let d = row[b.len()];
        (d <= max).then_some(d)
    }

    fn reset(&mut self, len: usize) -> &mut [usize] {
        self.row.clear();
        self.row.extend(0..=len);
        &mut self.row
    }
}

/// Edit distance between two character slices.
pub fn distance(a: &[char], b: &[char]) -> usize {
    EditDistance::with_capacity(b.len()).distance(a, b)
}

/// Bounded edit distance between two character slices.
pub fn distance_within(a: &[char], b: &[char], max: usize) -> Option<usize> {
    EditDistance::with_capacity(b.len()).distance_within(a, b, max)
}

/// Edit distance between two strings, counted in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}
