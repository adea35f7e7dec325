//! End-to-end scenarios on the classic 3×3 boards.

use sextant_harness::worlds::sliding_tile::{Board, SlidingTileProblem};
use sextant_kernel::operators::apply::apply_sequence;
use sextant_kernel::problem::Problem;
use sextant_search::policy::{SearchPolicy, Strategy};
use sextant_search::search::{find_solution, search, TerminationReason};

fn problem(rows: [[u8; 3]; 3]) -> SlidingTileProblem {
    SlidingTileProblem::from_rows(&rows.map(Vec::from)).unwrap()
}

#[test]
fn demo_board_costs_nineteen_with_both_engines() {
    let problem = problem([[1, 4, 8], [6, 3, 0], [5, 2, 7]]);
    assert_eq!(problem.heuristic(problem.initial_state()), 13);
    for strategy in Strategy::ALL {
        let solution = find_solution(&problem, strategy).unwrap();
        assert_eq!(solution.cost(), 19, "{strategy}");
        assert_eq!(solution.len(), 19, "{strategy}: unit step costs");
        let (end, cost) = apply_sequence(problem.initial_state(), solution.actions());
        assert_eq!(end, Board::goal(3).unwrap());
        assert_eq!(cost, 19);
    }
}

#[test]
fn second_demo_board_costs_twenty_six() {
    let problem = problem([[7, 2, 4], [5, 0, 6], [8, 3, 1]]);
    for strategy in Strategy::ALL {
        let solution = find_solution(&problem, strategy).unwrap();
        assert_eq!(solution.cost(), 26, "{strategy}");
        solution.verify(&problem).unwrap();
    }
}

#[test]
fn goal_board_needs_no_moves() {
    let problem = SlidingTileProblem::new(Board::goal(3).unwrap());
    for strategy in Strategy::ALL {
        let result = search(&problem, &SearchPolicy::new(strategy)).unwrap();
        let solution = result.solution.unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.cost(), 0);
        assert_eq!(result.termination_reason, TerminationReason::GoalReached);
        assert_eq!(result.stats.expansions, 0, "{strategy}");
    }
}

#[test]
fn one_move_board() {
    let problem = problem([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
    for strategy in Strategy::ALL {
        let solution = find_solution(&problem, strategy).unwrap();
        assert_eq!(
            solution.to_string(),
            "Solution: 1 action(s), total cost 1\n    1. move to (0, 0)"
        );
    }
}

#[test]
fn tight_budget_stops_both_engines() {
    let problem = problem([[7, 2, 4], [5, 0, 6], [8, 3, 1]]);
    for strategy in Strategy::ALL {
        let policy = SearchPolicy::new(strategy).with_max_expansions(10);
        let result = search(&problem, &policy).unwrap();
        assert_eq!(
            result.termination_reason,
            TerminationReason::ExpansionBudgetExceeded,
            "{strategy}"
        );
        assert!(result.solution.is_none());
        assert!(result.stats.expansions <= 10);
    }
}

#[test]
fn unsolvable_small_board_exhausts() {
    let problem = SlidingTileProblem::from_rows(&[vec![3, 1], vec![2, 0]]).unwrap();
    assert!(!problem.initial_state().is_solvable());
    for strategy in Strategy::ALL {
        let result = search(&problem, &SearchPolicy::new(strategy)).unwrap();
        assert_eq!(result.termination_reason, TerminationReason::FrontierExhausted);
        assert!(result.solution.is_none());
    }
}

#[test]
fn strategy_names_parse() {
    assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::BestFirst);
    assert_eq!("IDA*".parse::<Strategy>().unwrap(), Strategy::IterativeDeepening);
    assert!("greedy".parse::<Strategy>().is_err());
}
