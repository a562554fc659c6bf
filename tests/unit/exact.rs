//! Exact matchers through the public API.

use super::common::{chars, make_pattern, PREFIX_HEAVY};
use needle::{kmp_count, naive_count, KmpMatcher, KmpSearcher, LpsTable, MatchError, NaiveMatcher};

#[test]
fn test_overlapping_counts() {
    let cases = [
        ("aaaa", "aa", 3),
        ("abababa", "aba", 3),
        ("abcabc", "abc", 2),
        ("abc", "abcd", 0),
        ("", "a", 0),
        ("война и война", "война", 2),
    ];
    for (text, pattern, expected) in cases {
        let text = chars(text);
        let pattern = chars(pattern);
        assert_eq!(naive_count(&text, &pattern), Ok(expected), "naive {:?}", text);
        assert_eq!(kmp_count(&text, &pattern), Ok(expected), "kmp {:?}", text);
    }
}

#[test]
fn test_empty_pattern_rejected_by_both() {
    let text = chars("abc");
    assert_eq!(naive_count(&text, &[]), Err(MatchError::InvalidPattern));
    assert_eq!(kmp_count(&text, &[]), Err(MatchError::InvalidPattern));
}

#[test]
fn test_lps_tables() {
    assert_eq!(LpsTable::build(&chars("ababaca")).as_slice(), &[0, 0, 1, 2, 3, 0, 1]);
    assert_eq!(LpsTable::build(&chars("aaaa")).as_slice(), &[0, 1, 2, 3]);
    assert_eq!(LpsTable::build(&chars("abcd")).as_slice(), &[0, 0, 0, 0]);
    assert_eq!(LpsTable::build(&chars("a")).as_slice(), &[0]);
}

#[test]
fn test_matchers_agree_on_prefix_heavy_words() {
    for pattern in ["ab", "aba", "abab", "aab", "b"] {
        let pattern = make_pattern(pattern);
        for word in PREFIX_HEAVY {
            let text = chars(word);
            assert_eq!(
                NaiveMatcher.count(&text, &pattern),
                KmpMatcher.count(&text, &pattern),
                "pattern {} over {:?}",
                pattern,
                word
            );
        }
    }
}

#[test]
fn test_searcher_reused_across_texts() {
    let pattern = make_pattern("aba");
    let searcher = KmpSearcher::new(&pattern);
    assert_eq!(searcher.find_all(&chars("ababa")), vec![0, 2]);
    assert_eq!(searcher.find_all(&chars("xabax")), vec![1]);
    assert_eq!(searcher.count(&chars("bbbb")), 0);
}
