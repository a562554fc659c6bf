//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for the optimized matchers: the full Wagner-Fischer table instead of
//! a rolling row, and a direct window comparison instead of a failure
//! function. `strsim` is a second, independent Levenshtein oracle.

use needle::{distance, distance_within, kmp_count, levenshtein, naive_count, KmpSearcher, Pattern};
use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Classic Levenshtein edit distance via the full DP table.
///
/// O(nm) time and space. Slow but obviously correct.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }

    table[a.len()][b.len()]
}

/// Every start offset where the pattern occurs, by comparing each window.
pub fn oracle_find(text: &[char], pattern: &[char]) -> Vec<usize> {
    (0..text.len())
        .filter(|&i| text[i..].starts_with(pattern))
        .collect()
}

/// Longest proper prefix of `pattern[..=i]` that is also its suffix, by trying
/// every length.
pub fn oracle_lps(pattern: &[char]) -> Vec<usize> {
    (0..pattern.len())
        .map(|i| {
            let prefix = &pattern[..=i];
            (0..prefix.len())
                .rev()
                .find(|&len| prefix[..len] == prefix[prefix.len() - len..])
                .unwrap_or(0)
        })
        .collect()
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// =============================================================================
// DIFFERENTIAL PROPERTY TESTS
// =============================================================================

proptest! {
    /// Rolling-row distance equals the full table.
    #[test]
    fn prop_levenshtein_matches_oracle(a in "[a-dа-г]{0,12}", b in "[a-dа-г]{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// Distance agrees with strsim, an independent implementation.
    #[test]
    fn prop_levenshtein_matches_strsim(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// The bounded variant is exact at or below the bound and None above it.
    #[test]
    fn prop_bounded_distance_matches_oracle(
        a in "[abc]{0,10}",
        b in "[abc]{0,10}",
        max in 0usize..12
    ) {
        let expected = oracle_levenshtein(&a, &b);
        let got = distance_within(&chars(&a), &chars(&b), max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected));
        } else {
            prop_assert_eq!(got, None);
        }
    }

    /// Both exact counters equal the window oracle.
    #[test]
    fn prop_counts_match_oracle(text in "[ab]{0,40}", pattern in "[ab]{1,5}") {
        let (text, pattern) = (chars(&text), chars(&pattern));
        let expected = oracle_find(&text, &pattern).len();
        prop_assert_eq!(naive_count(&text, &pattern), Ok(expected));
        prop_assert_eq!(kmp_count(&text, &pattern), Ok(expected));
    }

    /// KMP reports the same start offsets as the oracle.
    #[test]
    fn prop_kmp_offsets_match_oracle(text in "[ab]{0,40}", pattern in "[ab]{1,5}") {
        let text = chars(&text);
        let pattern = Pattern::new(&pattern).unwrap();
        prop_assert_eq!(KmpSearcher::new(&pattern).find_all(&text), oracle_find(&text, pattern.chars()));
    }

    /// The failure function equals the brute-force prefix-suffix search.
    #[test]
    fn prop_lps_matches_oracle(pattern in "[ab]{1,12}") {
        let pattern = Pattern::new(&pattern).unwrap();
        let expected = oracle_lps(pattern.chars());
        let searcher = KmpSearcher::new(&pattern);
        prop_assert_eq!(searcher.lps().as_slice(), expected.as_slice());
    }

    /// Char-slice and str entry points agree.
    #[test]
    fn prop_str_and_char_entry_points_agree(a in "\\PC{0,10}", b in "\\PC{0,10}") {
        prop_assert_eq!(levenshtein(&a, &b), distance(&chars(&a), &chars(&b)));
    }
}
