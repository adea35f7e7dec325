//! Repeated and concurrent searches over one shared problem agree exactly.

use std::thread;

use lock_tests::fixtures::{random_route_map, scrambled_eight_puzzle};
use sextant_search::policy::{SearchPolicy, Strategy};
use sextant_search::search::search;

#[test]
fn repeated_searches_are_identical() {
    let problem = scrambled_eight_puzzle(7, 24);
    for strategy in Strategy::ALL {
        let policy = SearchPolicy::new(strategy);
        let first = search(&problem, &policy).unwrap();
        let second = search(&problem, &policy).unwrap();
        assert_eq!(first.solution, second.solution, "{strategy}");
        assert_eq!(first.stats, second.stats, "{strategy}");
    }
}

#[test]
fn concurrent_searches_share_one_problem() {
    let problem = scrambled_eight_puzzle(3, 22);
    let policy = SearchPolicy::new(Strategy::BestFirst);
    let baseline = search(&problem, &policy).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let problem = &problem;
                scope.spawn(move || {
                    let strategy = Strategy::ALL[i % 2];
                    search(problem, &SearchPolicy::new(strategy)).unwrap()
                })
            })
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(
                result.solution.map(|s| s.cost()),
                baseline.solution.as_ref().map(|s| s.cost())
            );
        }
    });
}

#[test]
fn route_map_stats_serialize_stably() {
    let map = random_route_map(11, 6, 12);
    let policy = SearchPolicy::new(Strategy::BestFirst);
    let a = serde_json::to_string(&search(&map, &policy).unwrap().stats).unwrap();
    let b = serde_json::to_string(&search(&map, &policy).unwrap().stats).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("\"expansions\""));
}
