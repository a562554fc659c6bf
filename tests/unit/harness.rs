//! Benchmark harness and size sweeps.

use super::common::{make_corpus, make_pattern, oracle_corpus_count, run_over, PREFIX_HEAVY};
use needle::bench::{run, RunConfig, Suite};
use needle::matcher::from_fn;
use needle::{FuzzyMatcher, KmpMatcher, MatchError, MaxDistance, NaiveMatcher, Outcome, Strategy};

#[test]
fn test_counts_sum_over_units() {
    let naive = run_over(&NaiveMatcher, "aa", &["aaaa", "baab"]);
    let kmp = run_over(&KmpMatcher, "aa", &["aaaa", "baab"]);
    assert_eq!(naive.match_count, 4);
    assert_eq!(kmp.match_count, 4);
    assert!(naive.matches.is_none());
}

#[test]
fn test_empty_corpus_counts_zero() {
    let result = run_over(&KmpMatcher, "abc", &[]);
    assert_eq!(result.match_count, 0);
    assert!(result.matches.is_none());
}

#[test]
fn test_fuzzy_matches_concatenate_in_corpus_order() {
    let result = run_over(&FuzzyMatcher::new(0).unwrap(), "ab", &["abab", "xab"]);
    assert_eq!(result.match_count, 3);

    let positions: Vec<usize> = result
        .matches
        .unwrap()
        .iter()
        .map(|m| m.position)
        .collect();
    assert_eq!(positions, vec![0, 2, 1]);
}

#[test]
fn test_run_override_beats_matcher_threshold() {
    let corpus = make_corpus(&["cat", "cut", "cot", "dog"]);
    let config = RunConfig::new(make_pattern("cat"), &corpus).with_max_distance(MaxDistance::from_usize(1));
    let result = run(&FuzzyMatcher::new(0).unwrap(), &config).unwrap();
    assert_eq!(result.match_count, 3);
}

#[test]
fn test_matcher_error_propagates() {
    let corpus = make_corpus(&["ok", "ok"]);
    let failing = from_fn("failing", |_: &[char], _: &_, _| Err(MatchError::InvalidPattern));
    let result = run(&failing, &RunConfig::new(make_pattern("ok"), &corpus));
    assert_eq!(result.unwrap_err(), MatchError::InvalidPattern);
}

#[test]
fn test_custom_matcher_needs_no_harness_change() {
    let corpus = make_corpus(&["a", "bb", "ccc"]);
    let lengths = from_fn("length", |text: &[char], _: &_, _| Ok(Outcome::Count(text.len())));
    let result = run(&lengths, &RunConfig::new(make_pattern("x"), &corpus)).unwrap();
    assert_eq!(result.match_count, 6);
}

#[test]
fn test_strategies_agree_with_oracle() {
    let corpus = make_corpus(PREFIX_HEAVY);
    let expected = oracle_corpus_count(&corpus, "ab");
    let config = RunConfig::new(make_pattern("ab"), &corpus);

    for strategy in Strategy::ALL {
        let matcher = strategy.matcher(MaxDistance::default());
        let result = run(&*matcher, &config).unwrap();
        assert_eq!(result.match_count, expected, "{}", strategy);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let corpus = make_corpus(&["abracadabra", "cadabra", "abra"]);
    let config = RunConfig::new(make_pattern("abra"), &corpus).with_max_distance(MaxDistance::from_usize(1));
    let matcher = FuzzyMatcher::new(1).unwrap();

    let first = run(&matcher, &config).unwrap();
    let second = run(&matcher, &config).unwrap();
    assert_eq!(first.match_count, second.match_count);
    assert_eq!(first.matches, second.matches);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_equals_sequential() {
    use needle::bench::run_parallel;

    let units: Vec<String> = (0..200).map(|i| "ab".repeat(i % 7)).collect();
    let refs: Vec<&str> = units.iter().map(String::as_str).collect();
    let corpus = make_corpus(&refs);
    let config = RunConfig::new(make_pattern("bab"), &corpus).with_max_distance(MaxDistance::from_usize(1));

    for strategy in Strategy::ALL {
        let matcher = strategy.matcher(MaxDistance::from_usize(1));
        let sequential = run(&*matcher, &config).unwrap();
        let parallel = run_parallel(&*matcher, &config).unwrap();
        assert_eq!(sequential.match_count, parallel.match_count, "{}", strategy);
        assert_eq!(sequential.matches, parallel.matches, "{}", strategy);
    }
}

#[test]
fn test_suite_sweeps_prefixes() {
    let corpus = make_corpus(&["aa", "aaa", "a", "aaaa"]);
    let report = Suite::new(make_pattern("aa"), vec![1, 2, 4])
        .series("Brute Force", NaiveMatcher, &corpus)
        .series("KMP", KmpMatcher, &corpus)
        .run()
        .unwrap();

    assert_eq!(report.sizes, vec![1, 2, 4]);
    let labels: Vec<&str> = report.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["Brute Force", "KMP"]);
    for dataset in &report.datasets {
        assert_eq!(dataset.counts, vec![1, 3, 6]);
    }
}
