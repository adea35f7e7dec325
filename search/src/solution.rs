//! `Solution`: the externally visible result of a successful search.
//!
//! Both engines hand their internal path representation to this module:
//! the best-first engine a predecessor chain in its node arena, IDA* the
//! action stack of its current branch. Either way the result lists actions
//! root-to-goal and carries a total equal to the goal node's `g`.

use std::fmt;

use sextant_kernel::carrier::cost::{total_cost, Cost};
use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;
use sextant_kernel::proof::replay::{replay_verify, ReplayError};

use crate::node::{NodeArena, NodeId};

/// Ordered actions from the initial state to a terminal state, with their
/// accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A> {
    actions: Vec<A>,
    cost: Cost,
}

impl<A: Action> Solution<A> {
    /// Build a solution from a root-to-goal action list and the goal's `g`.
    ///
    /// `cost` must equal the sum of the step costs; this is checked in debug
    /// builds.
    #[must_use]
    pub fn from_path(actions: Vec<A>, cost: Cost) -> Self {
        debug_assert_eq!(
            cost,
            total_cost(actions.iter().map(Action::cost)),
            "goal g must equal the summed step costs"
        );
        Self { actions, cost }
    }

    /// Reconstruct the solution ending at `goal_id` by walking predecessor
    /// links back to the root and reversing.
    #[must_use]
    pub fn from_arena<S>(arena: &NodeArena<S, A>, goal_id: NodeId) -> Self {
        let actions: Vec<A> = arena
            .path_to(goal_id)
            .into_iter()
            .filter_map(|id| arena.get(id).producing_action.clone())
            .collect();
        Self::from_path(actions, arena.get(goal_id).g_cost)
    }

    /// Actions in the order they must be applied.
    #[must_use]
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Total cost of the path.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the initial state was already terminal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Take ownership of the action list.
    #[must_use]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    /// Replay this solution against `problem`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] if the actions do not end in a terminal
    /// state or their costs do not add up to [`Solution::cost`].
    pub fn verify<P>(&self, problem: &P) -> Result<P::State, ReplayError>
    where
        P: Problem<Action = A>,
    {
        replay_verify(problem, &self.actions, self.cost)
    }
}

impl<A: fmt::Display> fmt::Display for Solution<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution: {} action(s), total cost {}",
            self.actions.len(),
            self.cost
        )?;
        for (i, action) in self.actions.iter().enumerate() {
            write!(f, "\n  {:>3}. {action}", i + 1)?;
        }
        Ok(())
    }
}
