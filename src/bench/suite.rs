// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Size sweeps: the same matchers over growing prefixes of their corpora.
//!
//! A suite holds one pattern, an ordered list of corpus sizes, and any number
//! of labeled series (a matcher paired with a corpus). For each size, every
//! series runs once over the first `size` units of its corpus. The result is a
//! [`Report`] shaped for a chart renderer: one x-axis of sizes, one line of
//! elapsed milliseconds per series.

use serde::Serialize;
use tracing::{trace, warn};

use super::{run, RunConfig};
use crate::error::Result;
use crate::matcher::Matcher;
use crate::types::{BenchmarkResult, MaxDistance, Pattern, TextUnit};

/// One line on the chart.
pub struct Series<'a> {
    pub label: String,
    pub matcher: Box<dyn Matcher + Send + Sync + 'a>,
    pub corpus: &'a [TextUnit],
}

/// Progress notification for one (size, series) measurement.
#[derive(Debug, Clone, Copy)]
pub struct SuitePoint<'r> {
    pub size: usize,
    /// Units actually measured; smaller than `size` when the corpus runs out.
    pub units: usize,
    pub label: &'r str,
    pub result: &'r BenchmarkResult,
}

/// Timing data for one series across all sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    /// Elapsed milliseconds per size.
    pub data: Vec<f64>,
    /// Match counts per size.
    pub counts: Vec<usize>,
}

/// Everything a renderer needs to draw the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sizes: Vec<usize>,
    pub datasets: Vec<Dataset>,
}

pub struct Suite<'a> {
    pattern: Pattern,
    max_distance: Option<MaxDistance>,
    sizes: Vec<usize>,
    series: Vec<Series<'a>>,
    parallel: bool,
}

impl<'a> Suite<'a> {
    pub fn new(pattern: Pattern, sizes: impl Into<Vec<usize>>) -> Self {
        Self {
            pattern,
            max_distance: None,
            sizes: sizes.into(),
            series: Vec::new(),
            parallel: false,
        }
    }

    pub fn max_distance(mut self, max_distance: MaxDistance) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Evaluate units on the rayon pool. Ignored without the `parallel` feature.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn series(
        mut self,
        label: impl Into<String>,
        matcher: impl Matcher + Send + Sync + 'a,
        corpus: &'a [TextUnit],
    ) -> Self {
        self.series.push(Series {
            label: label.into(),
            matcher: Box::new(matcher),
            corpus,
        });
        self
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total number of measurements a run will take.
    pub fn points(&self) -> usize {
        self.sizes.len() * self.series.len()
    }

    pub fn run(&self) -> Result<Report> {
        self.run_with(|_| {})
    }

    /// Run every measurement, reporting each one as it completes.
    ///
    /// Sizes are the outer loop, so a slow large size does not delay the
    /// small-size results of later series.
    pub fn run_with(&self, mut on_point: impl FnMut(SuitePoint<'_>)) -> Result<Report> {
        let mut datasets: Vec<Dataset> = self
            .series
            .iter()
            .map(|series| Dataset {
                label: series.label.clone(),
                data: Vec::with_capacity(self.sizes.len()),
                counts: Vec::with_capacity(self.sizes.len()),
            })
            .collect();

        let base = RunConfig {
            pattern: self.pattern.clone(),
            max_distance: self.max_distance,
            corpus: &[],
        };

        for &size in &self.sizes {
            for (series, dataset) in self.series.iter().zip(datasets.iter_mut()) {
                let prefix = &series.corpus[..size.min(series.corpus.len())];
                if prefix.len() < size {
                    warn!(
                        series = %series.label,
                        requested = size,
                        available = prefix.len(),
                        "corpus shorter than requested size"
                    );
                }

                let result = self.measure(&series.matcher, &base.with_corpus(prefix))?;
                trace!(
                    series = %series.label,
                    size,
                    matches = result.match_count,
                    elapsed_ms = result.elapsed_ms(),
                    "suite point"
                );

                dataset.data.push(result.elapsed_ms());
                dataset.counts.push(result.match_count);
                on_point(SuitePoint {
                    size,
                    units: prefix.len(),
                    label: &series.label,
                    result: &result,
                });
            }
        }

        Ok(Report {
            sizes: self.sizes.clone(),
            datasets,
        })
    }

    #[cfg(feature = "parallel")]
    fn measure<M: Matcher + Sync + ?Sized>(
        &self,
        matcher: &M,
        config: &RunConfig<'_>,
    ) -> Result<BenchmarkResult> {
        if self.parallel {
            super::run_parallel(matcher, config)
        } else {
            run(matcher, config)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn measure<M: Matcher + Sync + ?Sized>(
        &self,
        matcher: &M,
        config: &RunConfig<'_>,
    ) -> Result<BenchmarkResult> {
        if self.parallel {
            warn!("built without the `parallel` feature, running sequentially");
        }
        run(matcher, config)
    }
}
