//! Search entry points.

use serde::Serialize;
use tracing::debug;

use sextant_kernel::problem::Problem;

use crate::astar::best_first;
use crate::error::SearchError;
use crate::ida::iterative_deepening;
use crate::policy::{SearchPolicy, Strategy};
use crate::solution::Solution;
use crate::stats::SearchStats;

/// Why a search call stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// A terminal state was reached; the result carries a solution.
    GoalReached,
    /// The reachable state space was exhausted without reaching a goal.
    /// This is the normal "no solution" outcome, not a fault.
    FrontierExhausted,
    /// `max_expansions` was hit before either of the above.
    ExpansionBudgetExceeded,
}

/// Result of a search execution.
///
/// Check [`SearchResult::is_goal_reached`] or inspect `termination_reason`
/// to determine the outcome.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Engine that produced this result.
    pub strategy: Strategy,
    /// The solution (if a goal was reached).
    pub solution: Option<Solution<A>>,
    /// Why the search stopped.
    pub termination_reason: TerminationReason,
    /// Counters collected during the search.
    pub stats: SearchStats,
}

impl<A> SearchResult<A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason == TerminationReason::GoalReached
    }
}

/// Run the engine selected by `policy` against `problem`.
///
/// Every runtime outcome, including exhaustion and budget exhaustion,
/// returns `Ok`. Each call owns its own frontier or branch stack, so calls
/// sharing one `problem` are independent.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No search steps are taken in that case.
pub fn search<P: Problem>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::Action>, SearchError> {
    policy.validate()?;

    let result = run(problem, policy.strategy, policy.max_expansions);
    debug!(
        strategy = %result.strategy,
        termination = ?result.termination_reason,
        cost = result.solution.as_ref().map(Solution::cost),
        expansions = result.stats.expansions,
        generated = result.stats.generated,
        iterations = result.stats.iterations,
        "search finished"
    );
    Ok(result)
}

/// Find a minimum-cost solution with `strategy`, without a budget.
///
/// Returns `None` when no terminal state is reachable.
pub fn find_solution<P: Problem>(problem: &P, strategy: Strategy) -> Option<Solution<P::Action>> {
    run(problem, strategy, None).solution
}

fn run<P: Problem>(
    problem: &P,
    strategy: Strategy,
    max_expansions: Option<u64>,
) -> SearchResult<P::Action> {
    match strategy {
        Strategy::BestFirst => best_first(problem, max_expansions),
        Strategy::IterativeDeepening => iterative_deepening(problem, max_expansions),
    }
}
