//! Both engines return minimum-cost solutions: every reported cost matches
//! an independent uniform-cost search, and every solution replays.

use lock_tests::fixtures::{all_two_by_two, random_route_map, scrambled_eight_puzzle};
use lock_tests::oracle::{min_cost, reachable_count};
use sextant_kernel::problem::Problem;
use sextant_search::policy::{SearchPolicy, Strategy};
use sextant_search::search::{search, TerminationReason};

fn assert_matches_oracle<P>(problem: &P, label: &str)
where
    P: Problem,
{
    let expected = min_cost(problem);
    for strategy in Strategy::ALL {
        let result = search(problem, &SearchPolicy::new(strategy)).unwrap();
        match expected {
            Some(cost) => {
                let solution = result
                    .solution
                    .as_ref()
                    .unwrap_or_else(|| panic!("{label}: {strategy} found no solution"));
                assert_eq!(solution.cost(), cost, "{label}: {strategy} cost");
                assert_eq!(result.termination_reason, TerminationReason::GoalReached);
                let end = solution.verify(problem).unwrap();
                assert!(problem.is_terminal(&end));
            }
            None => {
                assert!(result.solution.is_none(), "{label}: {strategy}");
                assert_eq!(
                    result.termination_reason,
                    TerminationReason::FrontierExhausted,
                    "{label}: {strategy}"
                );
            }
        }
    }
}

#[test]
fn every_two_by_two_board() {
    let problems = all_two_by_two();
    assert_eq!(problems.len(), 24);

    let mut solvable = 0;
    for problem in &problems {
        let label = problem.to_string();
        // Each half of the permutations forms one closed orbit.
        assert_eq!(reachable_count(problem), 12, "{label}");
        if problem.initial_state().is_solvable() {
            solvable += 1;
            assert!(min_cost(problem).is_some(), "{label}");
        } else {
            assert!(min_cost(problem).is_none(), "{label}");
        }
        assert_matches_oracle(problem, &label);
    }
    assert_eq!(solvable, 12);
}

#[test]
fn hardest_two_by_two_costs_six() {
    let problems = all_two_by_two();
    let hardest = problems.iter().filter_map(min_cost).max();
    assert_eq!(hardest, Some(6));
}

#[test]
fn scrambled_eight_puzzles() {
    for seed in 0..8 {
        let problem = scrambled_eight_puzzle(seed, 18);
        assert_matches_oracle(&problem, &format!("seed {seed}"));
    }
}

#[test]
fn random_route_maps() {
    let mut unreachable = 0;
    for seed in 0..60 {
        let map = random_route_map(seed, 7, 12);
        if min_cost(&map).is_none() {
            unreachable += 1;
        }
        assert_matches_oracle(&map, &format!("seed {seed}"));
    }
    // Sparse maps should exercise both outcomes.
    assert!(unreachable > 0);
    assert!(unreachable < 60);
}
