//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Exhausting the state
//! space is not an error: it is reported as
//! [`crate::search::TerminationReason::FrontierExhausted`] with no solution.

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy carries a value the engines cannot honour.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// A strategy name did not match any known engine.
    #[error("unknown search strategy `{name}` (expected best_first or iterative_deepening)")]
    UnknownStrategy { name: String },
}
