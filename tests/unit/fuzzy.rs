//! Edit distance and fuzzy window search.

use super::common::{chars, exact_offsets, make_pattern, WAR_AND_PEACE};
use needle::{
    distance, distance_within, fuzzy_search, levenshtein, EditDistance, FuzzyMatcher, MatchError,
};

#[test]
fn test_known_distances() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("abc", ""), 3);
    assert_eq!(levenshtein("война", "война"), 0);
    assert_eq!(levenshtein("война", "воина"), 1);
}

#[test]
fn test_bounded_distance() {
    let a = chars("kitten");
    let b = chars("sitting");
    assert_eq!(distance_within(&a, &b, 3), Some(3));
    assert_eq!(distance_within(&a, &b, 2), None);
    assert_eq!(distance_within(&chars("a"), &chars("abcdef"), 2), None);
}

#[test]
fn test_scratch_reuse_matches_free_function() {
    let mut scratch = EditDistance::new();
    for (a, b) in [("abc", "abd"), ("longer text", "short"), ("", ""), ("мир", "мор")] {
        let (a, b) = (chars(a), chars(b));
        assert_eq!(scratch.distance(&a, &b), distance(&a, &b));
    }
}

#[test]
fn test_exact_threshold_finds_exact_offsets() {
    let text = chars(WAR_AND_PEACE);
    let pattern = chars("война");
    let matches = fuzzy_search(&text, &pattern, 0).unwrap();

    let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
    assert_eq!(positions, exact_offsets(&text, &pattern));
    assert_eq!(positions.len(), 2);
    assert!(matches.iter().all(|m| m.distance == 0 && m.substring == "война"));
}

#[test]
fn test_threshold_one_catches_single_edits() {
    let text = chars(WAR_AND_PEACE);
    let found = fuzzy_search(&text, &chars("война"), 1).unwrap();
    let substrings: Vec<&str> = found.iter().map(|m| m.substring.as_str()).collect();

    assert!(substrings.contains(&"Война"));
    assert!(substrings.contains(&"воина"));
    assert!(substrings.contains(&"вайна"));
    assert!(found.iter().all(|m| m.distance <= 1));
    assert!(found.windows(2).all(|w| w[0].position < w[1].position));
}

#[test]
fn test_window_width_limits_alignments() {
    // "abXcd" holds "abcd" after one deletion, but only as a 5-wide window.
    let found = fuzzy_search(&chars("abXcd"), &chars("abcd"), 1).unwrap();
    assert!(found.is_empty());
    assert_eq!(distance(&chars("abXcd"), &chars("abcd")), 1);
}

#[test]
fn test_argument_errors() {
    assert_eq!(
        fuzzy_search(&chars("abc"), &chars("a"), -1),
        Err(MatchError::InvalidArgument { max_distance: -1 })
    );
    assert_eq!(fuzzy_search(&chars("abc"), &[], 1), Err(MatchError::InvalidPattern));
    assert!(FuzzyMatcher::new(-3).is_err());
}

#[test]
fn test_pattern_longer_than_text() {
    let matcher = FuzzyMatcher::new(5).unwrap();
    assert!(matcher.search(&chars("ab"), &make_pattern("abc")).is_empty());
}
