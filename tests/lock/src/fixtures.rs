//! Deterministic problem generators.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sextant_harness::worlds::route_map::{PlaceSpec, RoadSpec, RouteMap, RouteMapSpec};
use sextant_harness::worlds::sliding_tile::{Board, SlidingTileProblem};

/// All 24 arrangements of a 2×2 board, solvable or not.
pub fn all_two_by_two() -> Vec<SlidingTileProblem> {
    let mut out = Vec::new();
    for a in 0..4u8 {
        for b in 0..4u8 {
            for c in 0..4u8 {
                for d in 0..4u8 {
                    let mut seen = [false; 4];
                    for t in [a, b, c, d] {
                        seen[usize::from(t)] = true;
                    }
                    if seen.iter().all(|&s| s) {
                        out.push(
                            SlidingTileProblem::from_rows(&[vec![a, b], vec![c, d]])
                                .expect("permutation is a valid board"),
                        );
                    }
                }
            }
        }
    }
    out
}

/// A 3×3 board reached by `steps` random blank moves from the goal.
///
/// Always solvable, with optimal cost at most `steps`.
pub fn scrambled_eight_puzzle(seed: u64, steps: usize) -> SlidingTileProblem {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::goal(3).expect("3x3 is supported");
    for _ in 0..steps {
        let neighbours = board.blank_neighbours();
        let to = neighbours[rng.gen_range(0..neighbours.len())];
        board = board.swapped(board.blank(), to);
    }
    SlidingTileProblem::new(board)
}

/// A random directed road network with `places` places and zero estimates.
///
/// Roads have costs in `1..=9`; the destination may be unreachable.
pub fn random_route_map(seed: u64, places: usize, roads: usize) -> RouteMap {
    let mut rng = SmallRng::seed_from_u64(seed);
    let name = |i: usize| format!("p{i}");
    let spec = RouteMapSpec {
        places: (0..places)
            .map(|i| PlaceSpec {
                name: name(i),
                estimate: 0,
            })
            .collect(),
        roads: (0..roads)
            .map(|_| RoadSpec {
                from: name(rng.gen_range(0..places)),
                to: name(rng.gen_range(0..places)),
                cost: rng.gen_range(1..=9),
            })
            .collect(),
        start: name(0),
        destination: name(places - 1),
    };
    RouteMap::new(&spec).expect("generated names are declared")
}
