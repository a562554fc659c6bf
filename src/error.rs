// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for matching, corpus loading, and configuration.
//!
//! Matching errors are argument errors: they are raised before a single
//! character is scanned, so a failed call never leaves partial results behind.
//! Nothing here is retryable. The same bad input fails the same way every time.

use std::path::PathBuf;

/// Result alias for matcher and harness operations.
pub type Result<T, E = MatchError> = std::result::Result<T, E>;

/// Invalid input handed to a matcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The pattern was empty.
    #[error("pattern must not be empty")]
    InvalidPattern,

    /// The fuzzy threshold was negative.
    #[error("max distance must be non-negative, got {max_distance}")]
    InvalidArgument { max_distance: i64 },
}

/// Failure while producing a corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// The source file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Random strings were requested with `min > max`.
    #[error("invalid length range: min {min} > max {max}")]
    InvalidLengthRange { min: usize, max: usize },
}

impl CorpusError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Failure while loading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
