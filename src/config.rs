// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmark settings: defaults, an optional JSON file, then CLI overrides.
//!
//! Only the CLI reads settings. The library takes explicit arguments
//! ([`RunConfig`](crate::bench::RunConfig), [`Suite`](crate::bench::Suite)),
//! so nothing below the binary depends on files or the environment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Corpus sizes swept by `compare` when nothing else is configured.
pub const DEFAULT_SIZES: [usize; 5] = [15_000, 50_000, 100_000, 250_000, 500_000];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Shortest generated random string.
    pub min_len: usize,
    /// Longest generated random string.
    pub max_len: usize,
    pub pattern: String,
    /// Fuzzy threshold. Signed because it is user input; validated on use.
    pub max_distance: i64,
    /// Text file supplying words (`compare`) or the whole text (`fuzzy`).
    pub text_path: PathBuf,
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 10,
            pattern: "война".to_string(),
            max_distance: 2,
            text_path: PathBuf::from("./text.txt"),
            sizes: DEFAULT_SIZES.to_vec(),
            seed: 42,
            parallel: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, or the file's contents when a path is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
