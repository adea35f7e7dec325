//! The `Action` contract.

use crate::carrier::cost::Cost;
use crate::carrier::state::SearchState;

/// A cost-bearing, pure transformation from one state to a successor.
///
/// The step cost is fixed when the action is constructed. `enact` must be a
/// pure function of its input: no interior mutation, no external effects.
/// Actions are cloned onto solution paths, so they should be cheap to copy.
pub trait Action: Clone {
    /// The state type this action operates on.
    type State: SearchState;

    /// Non-negative cost of taking this step.
    fn cost(&self) -> Cost;

    /// Produce the successor of `state`.
    fn enact(&self, state: &Self::State) -> Self::State;
}
