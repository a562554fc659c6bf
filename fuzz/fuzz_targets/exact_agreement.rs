// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Naive and KMP counting under arbitrary input.
//!
//! The two exact matchers must report the same overlapping count for every
//! text and pattern. KMP's fallback logic is where off-by-ones hide: a wrong
//! reset after a full match silently drops overlapping occurrences, and only
//! inputs with long self-overlapping prefixes expose it.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use needle::{kmp_count, naive_count, KmpSearcher, MatchError, Pattern};

#[derive(Debug, Arbitrary)]
struct ExactInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
    /// Fold both onto a tiny alphabet so matches are frequent.
    fold: bool,
}

fn to_chars(bytes: &[u8], fold: bool, cap: usize) -> Vec<char> {
    bytes
        .iter()
        .take(cap)
        .map(|&b| if fold { (b'a' + b % 3) as char } else { b as char })
        .collect()
}

fuzz_target!(|input: ExactInput| {
    let text = to_chars(&input.text, input.fold, 512);
    let pattern = to_chars(&input.pattern, input.fold, 16);

    let naive = naive_count(&text, &pattern);
    let kmp = kmp_count(&text, &pattern);

    if pattern.is_empty() {
        assert_eq!(naive, Err(MatchError::InvalidPattern));
        assert_eq!(kmp, Err(MatchError::InvalidPattern));
        return;
    }

    // INVARIANT 1: Both strategies agree
    assert_eq!(naive, kmp, "text={:?} pattern={:?}", text, pattern);

    // INVARIANT 2: Offsets are real, ascending, and as many as the count
    let pattern = Pattern::from_chars(pattern).expect("checked non-empty");
    let offsets = KmpSearcher::new(&pattern).find_all(&text);
    assert_eq!(Ok(offsets.len()), naive);
    for pair in offsets.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for &offset in &offsets {
        assert_eq!(&text[offset..offset + pattern.len()], pattern.chars());
    }

    // INVARIANT 3: Count never exceeds the number of windows
    let windows = (text.len() + 1).saturating_sub(pattern.len());
    assert!(offsets.len() <= windows);
});
