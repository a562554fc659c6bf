//! Corpus generation and loading.

use super::common::{oracle_corpus_count, text_file, WAR_AND_PEACE};
use needle::config::Settings;
use needle::corpus::{load_text, load_words, random_corpus, words, RandomStrings};
use needle::CorpusError;

#[test]
fn test_seed_reproducibility() {
    let a = random_corpus(1_000, 3, 10, 42).unwrap();
    let b = random_corpus(1_000, 3, 10, 42).unwrap();
    let c = random_corpus(1_000, 3, 10, 43).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_prefix_of_larger_corpus_is_smaller_corpus() {
    let small = random_corpus(100, 3, 10, 9).unwrap();
    let large = random_corpus(500, 3, 10, 9).unwrap();
    assert_eq!(small[..], large[..100]);
}

#[test]
fn test_custom_alphabet() {
    let corpus = RandomStrings::with_alphabet("ab", 4, 4, 1).unwrap().take(50);
    assert!(corpus.iter().all(|unit| unit.len() == 4));
    assert!(corpus
        .iter()
        .flat_map(|unit| unit.chars())
        .all(|c| *c == 'a' || *c == 'b'));
}

#[test]
fn test_words_from_file() {
    let file = text_file(WAR_AND_PEACE);
    let loaded = load_words(file.path()).unwrap();
    assert_eq!(loaded, words(WAR_AND_PEACE));
    assert_eq!(loaded.len(), 16);
    assert_eq!(oracle_corpus_count(&loaded, "война"), 2);
}

#[test]
fn test_load_text_keeps_whitespace() {
    let file = text_file("a  b\n");
    assert_eq!(load_text(file.path()).unwrap(), "a  b\n");
}

#[test]
fn test_missing_file_names_path() {
    let err = load_words("/no/such/dir/text.txt").unwrap_err();
    assert!(matches!(err, CorpusError::Read { .. }));
    assert!(err.to_string().contains("/no/such/dir/text.txt"));
}

#[test]
fn test_default_settings_drive_generator() {
    let settings = Settings::default();
    let corpus = random_corpus(10, settings.min_len, settings.max_len, settings.seed).unwrap();
    assert!(corpus
        .iter()
        .all(|unit| (settings.min_len..=settings.max_len).contains(&unit.len())));
}
