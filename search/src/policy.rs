//! Search policy types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Which engine explores the state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Best-first A*: open/closed sets, memory grows with visited states.
    #[default]
    BestFirst,
    /// IDA*: repeated cost-bounded depth-first passes, memory grows with depth.
    IterativeDeepening,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 2] = [Strategy::BestFirst, Strategy::IterativeDeepening];

    /// Stable snake-case name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BestFirst => "best_first",
            Self::IterativeDeepening => "iterative_deepening",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best_first" | "best-first" | "astar" | "a*" => Ok(Self::BestFirst),
            "iterative_deepening" | "iterative-deepening" | "ida" | "ida*" => {
                Ok(Self::IterativeDeepening)
            }
            _ => Err(SearchError::UnknownStrategy { name: s.to_string() }),
        }
    }
}

/// Engine selection plus an optional expansion budget.
///
/// With `max_expansions: None` the engines run until they find a goal or
/// exhaust the reachable state space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Engine to run.
    pub strategy: Strategy,
    /// Hard cap on node expansions (summed over IDA* iterations).
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Unbounded policy for `strategy`.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_expansions: None,
        }
    }

    /// Same policy with an expansion cap.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Reject values the engines cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 (use null for unbounded)".into(),
            });
        }
        Ok(())
    }
}
