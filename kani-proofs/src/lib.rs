// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for needle's exact matchers.
//!
//! This standalone crate extracts the KMP failure function and the two exact
//! counters and proves properties over every input up to a small size using
//! Kani. Small alphabets and short arrays are enough: KMP bugs show up in the
//! shape of self-overlap, not in the size of the input.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the LPS builder and both counters never index out of bounds
//! 2. **LPS bounds**: `lps[0] == 0`, `lps[i] <= i`, `lps[i] <= lps[i-1] + 1`
//! 3. **Agreement**: KMP count == naive count for all small inputs

/// Longest text checked symbolically.
pub const MAX_TEXT: usize = 6;

/// Longest pattern checked symbolically.
pub const MAX_PATTERN: usize = 4;

// ============================================================================
// EXACT MATCHING (copied from src/exact/kmp.rs and src/exact/naive.rs)
// ============================================================================

/// Failure function: `lps[i]` is the longest proper border of `pattern[..=i]`.
pub fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Overlapping KMP count. `pattern` must be non-empty.
pub fn kmp_count(text: &[u8], pattern: &[u8]) -> usize {
    let lps = build_lps(pattern);
    let m = pattern.len();
    let mut count = 0;
    let mut i = 0;
    let mut j = 0;

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                count += 1;
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    count
}

/// Overlapping window count. `pattern` must be non-empty.
pub fn naive_count(text: &[u8], pattern: &[u8]) -> usize {
    text.windows(pattern.len())
        .filter(|window| *window == pattern)
        .count()
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic bytes over {0, 1, 2}, of symbolic length in `1..=N`.
    fn small_bytes<const N: usize>() -> ([u8; N], usize) {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= N);
        let mut bytes = [0u8; N];
        for byte in bytes.iter_mut() {
            *byte = kani::any_where(|&b: &u8| b < 3);
        }
        (bytes, len)
    }

    /// Verify the LPS table never panics and respects its bounds.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_lps_bounds() {
        let (bytes, len) = small_bytes::<MAX_PATTERN>();
        let pattern = &bytes[..len];
        let lps = build_lps(pattern);

        kani::assert(lps.len() == pattern.len(), "one entry per pattern position");
        kani::assert(lps[0] == 0, "first entry must be zero");
        for i in 1..lps.len() {
            kani::assert(lps[i] <= i, "border must be proper");
            kani::assert(lps[i] <= lps[i - 1] + 1, "border grows by at most one");
        }
    }

    /// Verify each LPS entry is a real border.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_lps_entries_are_borders() {
        let (bytes, len) = small_bytes::<MAX_PATTERN>();
        let pattern = &bytes[..len];
        let lps = build_lps(pattern);

        for i in 0..lps.len() {
            let prefix = &pattern[..=i];
            let border = lps[i];
            kani::assert(
                prefix[..border] == prefix[prefix.len() - border..],
                "lps entry must be a prefix that is also a suffix",
            );
        }
    }

    /// Verify KMP and naive agree on every small input.
    #[kani::proof]
    #[kani::unwind(16)]
    fn verify_kmp_agrees_with_naive() {
        let (text_bytes, text_len) = small_bytes::<MAX_TEXT>();
        let (pattern_bytes, pattern_len) = small_bytes::<MAX_PATTERN>();
        let text = &text_bytes[..text_len];
        let pattern = &pattern_bytes[..pattern_len];

        kani::assert(
            kmp_count(text, pattern) == naive_count(text, pattern),
            "KMP must count exactly the overlapping occurrences",
        );
    }

    /// Verify counts never exceed the number of windows.
    #[kani::proof]
    #[kani::unwind(16)]
    fn verify_count_bounded_by_windows() {
        let (text_bytes, text_len) = small_bytes::<MAX_TEXT>();
        let (pattern_bytes, pattern_len) = small_bytes::<MAX_PATTERN>();
        let text = &text_bytes[..text_len];
        let pattern = &pattern_bytes[..pattern_len];

        let windows = (text.len() + 1).saturating_sub(pattern.len());
        kani::assert(kmp_count(text, pattern) <= windows, "at most one match per window");
    }
}
