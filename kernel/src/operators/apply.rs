//! `apply_sequence()`: enact a list of actions from a starting state.

use crate::carrier::cost::Cost;
use crate::operators::action::Action;

/// Apply `actions` in order starting from `initial`.
///
/// Returns the final state and the saturating sum of step costs. An empty
/// sequence returns a clone of `initial` at cost 0.
#[must_use]
pub fn apply_sequence<A: Action>(initial: &A::State, actions: &[A]) -> (A::State, Cost) {
    actions
        .iter()
        .fold((initial.clone(), 0), |(state, cost), action| {
            (action.enact(&state), cost.saturating_add(action.cost()))
        })
}
