// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmark harness: time a matcher over a corpus and aggregate its output.
//!
//! The harness does no matching of its own. It walks the corpus in order,
//! hands each unit to the matcher, sums the counts, collects match records
//! when the matcher produces them, and reads a monotonic clock once before
//! and once after the whole walk. Per-unit timing would measure the clock
//! more than the matcher for short units.
//!
//! Everything a run needs arrives in [`RunConfig`]. Nothing is read from the
//! environment, so two runs over the same config produce the same counts and
//! the same matches. Only the elapsed time differs.

mod suite;

pub use suite::{Dataset, Report, Series, Suite, SuitePoint};

use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::matcher::{Matcher, Outcome};
use crate::types::{BenchmarkResult, MatchRecord, MaxDistance, Pattern, TextUnit};

/// Inputs for one harness run.
#[derive(Debug, Clone)]
pub struct RunConfig<'a> {
    pub pattern: Pattern,
    /// Overrides a fuzzy matcher's own threshold. Exact matchers ignore it.
    pub max_distance: Option<MaxDistance>,
    pub corpus: &'a [TextUnit],
}

impl<'a> RunConfig<'a> {
    pub fn new(pattern: Pattern, corpus: &'a [TextUnit]) -> Self {
        Self {
            pattern,
            max_distance: None,
            corpus,
        }
    }

    pub fn with_max_distance(mut self, max_distance: MaxDistance) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Same pattern and threshold over a different corpus.
    pub fn with_corpus<'b>(&self, corpus: &'b [TextUnit]) -> RunConfig<'b> {
        RunConfig {
            pattern: self.pattern.clone(),
            max_distance: self.max_distance,
            corpus,
        }
    }
}

/// Running totals across units.
#[derive(Debug, Default)]
struct Tally {
    match_count: usize,
    matches: Option<Vec<MatchRecord>>,
}

impl Tally {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Count(n) => self.match_count += n,
            Outcome::Matches(found) => {
                self.match_count += found.len();
                self.matches.get_or_insert_with(Vec::new).extend(found);
            }
        }
    }
}

/// Run `matcher` over every unit of the corpus, in order.
///
/// The first matcher error aborts the run and is returned as is.
pub fn run<M: Matcher + ?Sized>(matcher: &M, config: &RunConfig<'_>) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let mut tally = Tally::default();

    for unit in config.corpus {
        let outcome = matcher.evaluate(unit.chars(), &config.pattern, config.max_distance)?;
        tally.add(outcome);
    }

    let elapsed = start.elapsed();
    debug!(
        matcher = matcher.label(),
        units = config.corpus.len(),
        matches = tally.match_count,
        elapsed_us = elapsed.as_micros() as u64,
        "harness run complete"
    );

    Ok(BenchmarkResult {
        elapsed,
        match_count: tally.match_count,
        matches: tally.matches,
    })
}

/// Like [`run`], with units evaluated across the rayon pool.
///
/// Counts are summed and match records are kept in corpus order, so the
/// result equals the sequential one apart from `elapsed`, which still covers
/// the whole run and never a single unit.
#[cfg(feature = "parallel")]
pub fn run_parallel<M: Matcher + Sync + ?Sized>(
    matcher: &M,
    config: &RunConfig<'_>,
) -> Result<BenchmarkResult> {
    use rayon::prelude::*;

    let start = Instant::now();
    let outcomes = config
        .corpus
        .par_iter()
        .map(|unit| matcher.evaluate(unit.chars(), &config.pattern, config.max_distance))
        .collect::<Result<Vec<Outcome>>>()?;

    let mut tally = Tally::default();
    for outcome in outcomes {
        tally.add(outcome);
    }
    let elapsed = start.elapsed();

    debug!(
        matcher = matcher.label(),
        units = config.corpus.len(),
        matches = tally.match_count,
        elapsed_us = elapsed.as_micros() as u64,
        threads = rayon::current_num_threads(),
        "parallel harness run complete"
    );

    Ok(BenchmarkResult {
        elapsed,
        match_count: tally.match_count,
        matches: tally.matches,
    })
}
