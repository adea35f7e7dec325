//! `replay_verify()`: check a claimed solution by deterministic replay.
//!
//! Re-enacts the action sequence from the problem's initial state and
//! confirms that the final state is terminal and that the step costs sum to
//! the claimed total. This is independent of whichever engine produced the
//! sequence.

use thiserror::Error;

use crate::carrier::cost::Cost;
use crate::operators::apply::apply_sequence;
use crate::problem::Problem;

/// Why a replayed action sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The final state does not satisfy the terminal test.
    #[error("replay of {steps} action(s) did not reach a terminal state")]
    NotTerminal { steps: usize },
    /// The step costs do not add up to the claimed total.
    #[error("claimed cost {claimed} but replayed actions cost {actual}")]
    CostMismatch { claimed: Cost, actual: Cost },
}

/// Replay `actions` against `problem` and check the claimed cost.
///
/// Returns the terminal state on success.
///
/// # Errors
///
/// Returns [`ReplayError::NotTerminal`] if the sequence ends outside the goal
/// set, or [`ReplayError::CostMismatch`] if the summed step costs differ from
/// `claimed_cost`. The terminal check runs first.
pub fn replay_verify<P: Problem>(
    problem: &P,
    actions: &[P::Action],
    claimed_cost: Cost,
) -> Result<P::State, ReplayError> {
    let (state, actual) = apply_sequence(problem.initial_state(), actions);
    if !problem.is_terminal(&state) {
        return Err(ReplayError::NotTerminal {
            steps: actions.len(),
        });
    }
    if actual != claimed_cost {
        return Err(ReplayError::CostMismatch {
            claimed: claimed_cost,
            actual,
        });
    }
    Ok(state)
}
