// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the needle command-line interface.
//!
//! Three subcommands: `compare` sweeps corpus sizes for the exact matchers,
//! `fuzzy` runs the approximate matcher over a whole text file, and `count`
//! runs any single strategy over text given on the command line.
//!
//! Every flag is optional. Unset flags fall back to the `--config` file, and
//! unset file keys fall back to the built-in defaults.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use needle::config::Settings;
use needle::Strategy;

#[derive(Parser)]
#[command(
    name = "needle",
    about = "Compare exact and fuzzy substring matching over text corpora",
    version
)]
pub struct Cli {
    /// JSON settings file (camelCase keys, all optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log harness activity to stderr (overridden by NEEDLE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time brute force against KMP on random strings and file words
    Compare(CompareArgs),

    /// Fuzzy search a text file and list every match
    Fuzzy(FuzzyArgs),

    /// Run one strategy over text given on the command line
    Count(CountArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Pattern to count
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Shortest random string
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Longest random string
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Text file supplying the word corpus
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Corpus sizes to sweep, comma separated
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Seed for the random corpus
    #[arg(long)]
    pub seed: Option<u64>,

    /// Evaluate corpus units on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FuzzyArgs {
    /// Pattern to search for
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Maximum Levenshtein distance (must be non-negative)
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    pub max_distance: Option<i64>,

    /// Text file to search
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Show at most this many matches in the table
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CountArgs {
    /// Strategy: naive, kmp, or fuzzy
    #[arg(short, long, default_value = "kmp")]
    pub strategy: Strategy,

    /// Pattern to count
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Maximum Levenshtein distance for the fuzzy strategy
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    pub max_distance: Option<i64>,

    /// Text units to search, one per argument
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CompareArgs {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(pattern) = &self.pattern {
            settings.pattern = pattern.clone();
        }
        if let Some(min_len) = self.min_len {
            settings.min_len = min_len;
        }
        if let Some(max_len) = self.max_len {
            settings.max_len = max_len;
        }
        if let Some(text) = &self.text {
            settings.text_path = text.clone();
        }
        if let Some(sizes) = &self.sizes {
            settings.sizes = sizes.clone();
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        settings.parallel |= self.parallel;
        settings
    }
}

impl FuzzyArgs {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(pattern) = &self.pattern {
            settings.pattern = pattern.clone();
        }
        if let Some(max_distance) = self.max_distance {
            settings.max_distance = max_distance;
        }
        if let Some(text) = &self.text {
            settings.text_path = text.clone();
        }
        settings
    }
}

impl CountArgs {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(pattern) = &self.pattern {
            settings.pattern = pattern.clone();
        }
        if let Some(max_distance) = self.max_distance {
            settings.max_distance = max_distance;
        }
        settings
    }
}
