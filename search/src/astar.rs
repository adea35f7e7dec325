//! Best-first engine (A*).
//!
//! Pops the open node with the smallest `f = g + h`, tests it for the goal,
//! and otherwise expands it. Successors that do not improve on a known `g`
//! (open or closed) are suppressed; cheaper rediscoveries of closed states
//! reopen them. With an admissible heuristic the first terminal node popped
//! is cost-optimal.

use tracing::debug;

use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;

use crate::frontier::{Admission, BestFirstFrontier};
use crate::node::{FrontierKey, NodeArena};
use crate::policy::Strategy;
use crate::search::{SearchResult, TerminationReason};
use crate::solution::Solution;
use crate::stats::SearchStats;

/// Run best-first search from the problem's initial state.
///
/// `max_expansions` caps node expansions; `None` runs until a goal is popped
/// or the open set empties.
pub fn best_first<P: Problem>(problem: &P, max_expansions: Option<u64>) -> SearchResult<P::Action> {
    let mut arena: NodeArena<P::State, P::Action> = NodeArena::new();
    let mut frontier: BestFirstFrontier<P::State> = BestFirstFrontier::new();
    let mut stats = SearchStats {
        iterations: 1,
        ..SearchStats::default()
    };

    let root_state = problem.initial_state().clone();
    let root_id = arena.push_root(root_state.clone(), problem.heuristic(&root_state));
    frontier.admit(&root_state, 0);
    frontier.push(root_state, FrontierKey::from(arena.get(root_id)), root_id);

    let termination_reason;
    let mut solution = None;

    loop {
        let Some(current_id) = frontier.pop(&arena) else {
            termination_reason = TerminationReason::FrontierExhausted;
            break;
        };

        let current = arena.get(current_id);
        if problem.is_terminal(&current.state) {
            solution = Some(Solution::from_arena(&arena, current_id));
            termination_reason = TerminationReason::GoalReached;
            break;
        }

        if max_expansions.is_some_and(|max| stats.expansions >= max) {
            termination_reason = TerminationReason::ExpansionBudgetExceeded;
            break;
        }

        let state = current.state.clone();
        let g_cost = current.g_cost;
        stats.expansions += 1;
        stats.observe_depth(current.depth);

        // Closing before enumeration suppresses self-loops.
        frontier.close(state.clone(), g_cost);

        for action in problem.actions(&state) {
            stats.generated += 1;
            let successor = action.enact(&state);
            let successor_g = g_cost.saturating_add(action.cost());

            match frontier.admit(&successor, successor_g) {
                Admission::Suppressed => {
                    stats.duplicates_suppressed += 1;
                    continue;
                }
                Admission::Reopened => {
                    stats.reopened += 1;
                    debug!(g_cost = successor_g, "reopening closed state on cheaper path");
                }
                Admission::New | Admission::Improved => {}
            }

            let h_cost = problem.heuristic(&successor);
            let child_id =
                arena.push_child(current_id, successor.clone(), action, successor_g, h_cost);
            frontier.push(successor, FrontierKey::from(arena.get(child_id)), child_id);
        }
    }

    stats.stale_pops = frontier.stale_pops();
    stats.frontier_high_water = frontier.high_water();

    SearchResult {
        strategy: Strategy::BestFirst,
        solution,
        termination_reason,
        stats,
    }
}
