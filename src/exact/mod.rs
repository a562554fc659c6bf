// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact matching: count every occurrence of a pattern in a text.
//!
//! Two strategies with one answer. The brute-force scan is the reference; KMP
//! must agree with it on every input, overlapping occurrences included.

mod kmp;
mod naive;

pub use kmp::{kmp_count_overlapping, KmpMatcher, KmpSearcher, LpsTable};
pub use naive::{count_overlapping, find_overlapping, NaiveMatcher};

use crate::error::{MatchError, Result};

/// Brute-force occurrence count. Fails on an empty pattern.
pub fn naive_count(text: &[char], pattern: &[char]) -> Result<usize> {
    if pattern.is_empty() {
        return Err(MatchError::InvalidPattern);
    }
    Ok(count_overlapping(text, pattern))
}

/// KMP occurrence count. Fails on an empty pattern.
pub fn kmp_count(text: &[char], pattern: &[char]) -> Result<usize> {
    if pattern.is_empty() {
        return Err(MatchError::InvalidPattern);
    }
    Ok(kmp_count_overlapping(text, pattern))
}
