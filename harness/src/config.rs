//! Run configuration: which boards to solve, with which engines, for how long.
//!
//! Loaded from JSON. Every field has a default, and the defaults reproduce the
//! classic demo: two 3×3 boards, both strategies, a one-second timing window.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sextant_search::error::SearchError;
use sextant_search::policy::{SearchPolicy, Strategy};

use crate::worlds::sliding_tile::{Board, BoardError};

/// Typed failure for loading or validating a [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config is not valid JSON for this schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required list is empty.
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
    /// A board layout is malformed.
    #[error("board #{index} is invalid: {source}")]
    InvalidBoard { index: usize, source: BoardError },
    /// The derived search policy is invalid.
    #[error(transparent)]
    InvalidPolicy(#[from] SearchError),
}

/// Harness run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Start boards, each as rows of tile numbers (0 = blank).
    pub boards: Vec<Vec<Vec<u8>>>,
    /// Engines to run on every board.
    pub strategies: Vec<Strategy>,
    /// Wall-clock window for repeated timing solves, in milliseconds.
    pub trial_window_ms: u64,
    /// Optional expansion cap applied to every search.
    pub max_expansions: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            boards: vec![
                vec![vec![1, 4, 8], vec![6, 3, 0], vec![5, 2, 7]],
                vec![vec![7, 2, 4], vec![5, 0, 6], vec![8, 3, 1]],
            ],
            strategies: Strategy::ALL.to_vec(),
            trial_window_ms: 1000,
            max_expansions: None,
        }
    }
}

impl RunConfig {
    /// Read and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise any
    /// error from [`RunConfig::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error from
    /// [`RunConfig::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every board and the derived policies.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boards.is_empty() {
            return Err(ConfigError::Empty { field: "boards" });
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::Empty {
                field: "strategies",
            });
        }
        self.parsed_boards()?;
        for policy in self.policies() {
            policy.validate()?;
        }
        Ok(())
    }

    /// Boards as validated [`Board`] values, in config order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBoard`] for the first malformed layout.
    pub fn parsed_boards(&self) -> Result<Vec<Board>, ConfigError> {
        self.boards
            .iter()
            .enumerate()
            .map(|(index, rows)| {
                Board::new(rows).map_err(|source| ConfigError::InvalidBoard { index, source })
            })
            .collect()
    }

    /// One search policy per configured strategy.
    #[must_use]
    pub fn policies(&self) -> Vec<SearchPolicy> {
        self.strategies
            .iter()
            .map(|&strategy| SearchPolicy {
                strategy,
                max_expansions: self.max_expansions,
            })
            .collect()
    }

    /// The timing window as a [`Duration`].
    #[must_use]
    pub fn trial_window(&self) -> Duration {
        Duration::from_millis(self.trial_window_ms)
    }
}
