//! Iterative-deepening engine (IDA*).
//!
//! Each pass is a depth-first search from the root that prunes any node with
//! `f = g + h` above the current bound. The smallest pruned `f` becomes the
//! next bound. Only the current branch is stored, so memory is proportional
//! to solution depth; states are deduplicated against the branch (cycle
//! avoidance) but never across branches.
//!
//! The branch lives on an explicit stack of frames, one per expanded node,
//! so depth is limited by heap memory rather than the thread stack.

use std::collections::HashSet;
use std::vec;

use tracing::debug;

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;

use crate::policy::Strategy;
use crate::search::{SearchResult, TerminationReason};
use crate::solution::Solution;
use crate::stats::SearchStats;

/// Outcome of one bounded pass.
enum Probe {
    /// A terminal state was reached at this path cost; the branch is kept.
    Found(Cost),
    /// Every branch was pruned or exhausted.
    Continue,
    /// The expansion budget ran out mid-pass.
    BudgetExceeded,
}

/// An expanded node on the current branch: its path cost and the actions
/// not yet tried from it.
struct Frame<A> {
    g_cost: Cost,
    untried: vec::IntoIter<A>,
}

/// Per-call traversal state: the current branch plus pass bookkeeping.
///
/// `path_states[i]` is the state of `frames[i]`; `path_actions[i]` leads
/// from `path_states[i]` to `path_states[i + 1]`.
struct Descent<'p, P: Problem> {
    problem: &'p P,
    max_expansions: Option<u64>,
    bound: Cost,
    next_bound: Option<Cost>,
    frames: Vec<Frame<P::Action>>,
    path_states: Vec<P::State>,
    path_actions: Vec<P::Action>,
    on_path: HashSet<P::State>,
    stats: SearchStats,
}

impl<P: Problem> Descent<'_, P> {
    fn note_pruned(&mut self, f_cost: Cost) {
        self.next_bound = Some(self.next_bound.map_or(f_cost, |b| b.min(f_cost)));
    }

    fn budget_spent(&self) -> bool {
        self.max_expansions
            .is_some_and(|max| self.stats.expansions >= max)
    }

    /// Open a frame for the state at the top of the branch.
    fn expand_top(&mut self, g_cost: Cost) {
        self.stats.expansions += 1;
        #[allow(clippy::cast_possible_truncation)]
        let depth = self.path_actions.len() as u32;
        self.stats.observe_depth(depth);

        let Some(state) = self.path_states.last() else {
            return;
        };
        let untried = self.problem.actions(state).into_iter();
        self.frames.push(Frame { g_cost, untried });
    }

    /// Drop the deepest frame and the state it was expanding.
    fn retreat(&mut self) {
        self.frames.pop();
        if self.frames.is_empty() {
            return;
        }
        if let Some(state) = self.path_states.pop() {
            self.on_path.remove(&state);
        }
        self.path_actions.pop();
    }

    /// Reset the branch to the bare root.
    fn restart(&mut self) {
        self.frames.clear();
        self.path_states.truncate(1);
        self.path_actions.clear();
        self.on_path.clear();
        self.on_path.extend(self.path_states.iter().cloned());
        self.next_bound = None;
    }

    /// One depth-first pass under the current bound.
    fn pass(&mut self) -> Probe {
        self.restart();
        let Some(root) = self.path_states.first() else {
            return Probe::Continue;
        };
        // The bound never drops below h(root), so the root itself is never pruned.
        if self.problem.is_terminal(root) {
            return Probe::Found(0);
        }
        if self.budget_spent() {
            return Probe::BudgetExceeded;
        }
        self.expand_top(0);

        loop {
            let Some(frame) = self.frames.last_mut() else {
                return Probe::Continue;
            };
            let g_cost = frame.g_cost;
            let Some(action) = frame.untried.next() else {
                self.retreat();
                continue;
            };
            let Some(state) = self.path_states.last() else {
                return Probe::Continue;
            };

            self.stats.generated += 1;
            let successor = action.enact(state);
            if self.on_path.contains(&successor) {
                self.stats.duplicates_suppressed += 1;
                continue;
            }
            let successor_g = g_cost.saturating_add(action.cost());
            let f_cost = successor_g.saturating_add(self.problem.heuristic(&successor));
            if f_cost > self.bound {
                self.note_pruned(f_cost);
                continue;
            }

            let terminal = self.problem.is_terminal(&successor);
            self.on_path.insert(successor.clone());
            self.path_states.push(successor);
            self.path_actions.push(action);
            let high_water = self.path_states.len() as u64;
            if high_water > self.stats.frontier_high_water {
                self.stats.frontier_high_water = high_water;
            }

            if terminal {
                return Probe::Found(successor_g);
            }
            if self.budget_spent() {
                return Probe::BudgetExceeded;
            }
            self.expand_top(successor_g);
        }
    }
}

/// Run IDA* from the problem's initial state.
///
/// `max_expansions` caps node expansions summed over all passes; `None`
/// runs until a goal is found or a pass prunes nothing.
pub fn iterative_deepening<P: Problem>(
    problem: &P,
    max_expansions: Option<u64>,
) -> SearchResult<P::Action> {
    let root = problem.initial_state().clone();
    let mut descent = Descent {
        problem,
        max_expansions,
        bound: problem.heuristic(&root),
        next_bound: None,
        frames: Vec::new(),
        path_states: vec![root],
        path_actions: Vec::new(),
        on_path: HashSet::new(),
        stats: SearchStats {
            frontier_high_water: 1,
            ..SearchStats::default()
        },
    };

    let (termination_reason, solution) = loop {
        descent.stats.iterations += 1;
        debug!(
            iteration = descent.stats.iterations,
            bound = descent.bound,
            expansions = descent.stats.expansions,
            "starting bounded pass"
        );

        match descent.pass() {
            Probe::Found(g_cost) => {
                let actions = std::mem::take(&mut descent.path_actions);
                break (
                    TerminationReason::GoalReached,
                    Some(Solution::from_path(actions, g_cost)),
                );
            }
            Probe::BudgetExceeded => break (TerminationReason::ExpansionBudgetExceeded, None),
            Probe::Continue => match descent.next_bound {
                Some(next) => descent.bound = next,
                None => break (TerminationReason::FrontierExhausted, None),
            },
        }
    };

    let mut stats = descent.stats;
    stats.final_bound = Some(descent.bound);

    SearchResult {
        strategy: Strategy::IterativeDeepening,
        solution,
        termination_reason,
        stats,
    }
}
