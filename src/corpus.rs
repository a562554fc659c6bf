// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus sources: seeded random strings and whitespace-split files.
//!
//! The matchers never see where a corpus came from. These helpers exist so the
//! CLI and the benchmarks can build the two corpora the comparison is about:
//! random strings over the Russian alphabet (few natural repeats, so the
//! matchers mostly scan and reject) and real words from a text file (many
//! shared prefixes, so KMP's fallbacks actually get exercised).
//!
//! Random corpora are seeded. The same seed gives the same strings on every
//! machine, which is what makes timings across runs comparable at all.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::CorpusError;
use crate::types::{Corpus, TextUnit};

/// Lower and upper case Russian letters, Ё included.
pub const RUSSIAN_ALPHABET: &str =
    "абвгдеёжзийклмнопрстуфхцчшщъыьэюяАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Generates random strings from a fixed alphabet.
#[derive(Debug, Clone)]
pub struct RandomStrings {
    alphabet: Vec<char>,
    min_len: usize,
    max_len: usize,
    rng: StdRng,
}

impl RandomStrings {
    pub fn new(min_len: usize, max_len: usize, seed: u64) -> Result<Self, CorpusError> {
        Self::with_alphabet(RUSSIAN_ALPHABET, min_len, max_len, seed)
    }

    pub fn with_alphabet(
        alphabet: &str,
        min_len: usize,
        max_len: usize,
        seed: u64,
    ) -> Result<Self, CorpusError> {
        if min_len > max_len {
            return Err(CorpusError::InvalidLengthRange {
                min: min_len,
                max: max_len,
            });
        }
        Ok(Self {
            alphabet: alphabet.chars().collect(),
            min_len,
            max_len,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// One string with length drawn uniformly from `[min_len, max_len]`.
    pub fn next_unit(&mut self) -> TextUnit {
        let len = self.rng.random_range(self.min_len..=self.max_len);
        if self.alphabet.is_empty() {
            return TextUnit::from("");
        }
        let text: String = (0..len)
            .map(|_| self.alphabet[self.rng.random_range(0..self.alphabet.len())])
            .collect();
        TextUnit::from(text)
    }

    pub fn take(&mut self, count: usize) -> Corpus {
        (0..count).map(|_| self.next_unit()).collect()
    }
}

/// `count` random strings over the Russian alphabet.
pub fn random_corpus(
    count: usize,
    min_len: usize,
    max_len: usize,
    seed: u64,
) -> Result<Corpus, CorpusError> {
    let corpus = RandomStrings::new(min_len, max_len, seed)?.take(count);
    debug!(count, min_len, max_len, seed, "generated random corpus");
    Ok(corpus)
}

/// Split text on runs of whitespace. Empty tokens are dropped.
pub fn words(text: &str) -> Corpus {
    text.split_whitespace().map(TextUnit::from).collect()
}

/// Read a whole file as text.
pub fn load_text(path: impl AsRef<Path>) -> Result<String, CorpusError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| CorpusError::read(path, e))
}

/// Read a file and split it into words.
pub fn load_words(path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let corpus = words(&load_text(path)?);
    debug!(path = %path.display(), words = corpus.len(), "loaded word corpus");
    Ok(corpus)
}
