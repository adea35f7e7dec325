//! Shared fixtures for sextant benchmark suites.

use sextant_harness::worlds::sliding_tile::{Board, SlidingTileProblem};

/// A named start board with its known optimal solution cost.
pub struct PuzzleCase {
    pub name: &'static str,
    pub problem: SlidingTileProblem,
    pub optimal_cost: u64,
}

/// 3×3 boards at increasing optimal depth.
///
/// # Panics
///
/// Panics if a hard-coded layout is malformed. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn eight_puzzle_cases() -> Vec<PuzzleCase> {
    let case = |name, rows: [[u8; 3]; 3], optimal_cost| PuzzleCase {
        name,
        problem: SlidingTileProblem::from_rows(&rows.map(Vec::from)).expect("valid board"),
        optimal_cost,
    };
    vec![
        case("depth_1", [[1, 0, 2], [3, 4, 5], [6, 7, 8]], 1),
        case("depth_19", [[1, 4, 8], [6, 3, 0], [5, 2, 7]], 19),
        case("depth_26", [[7, 2, 4], [5, 0, 6], [8, 3, 1]], 26),
    ]
}

/// A scrambled board of dimension `dim`, reached by walking the blank
/// `steps` times in a fixed pattern from the goal.
///
/// # Panics
///
/// Panics if `dim` is outside the supported board sizes.
#[must_use]
pub fn scrambled(dim: usize, steps: usize) -> Board {
    let mut board = Board::goal(dim).expect("supported dimension");
    for step in 0..steps {
        let neighbours = board.blank_neighbours();
        let to = neighbours[(step * 7 + 3) % neighbours.len()];
        board = board.swapped(board.blank(), to);
    }
    board
}
