//! Tiny explicit-graph problems for engine unit tests.

use std::collections::BTreeMap;
use std::fmt;

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;

/// Follow one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: u8,
    pub cost: Cost,
}

impl Action for Edge {
    type State = u8;

    fn cost(&self) -> Cost {
        self.cost
    }

    fn enact(&self, _state: &u8) -> u8 {
        self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "go to {} (cost {})", self.to, self.cost)
    }
}

/// Directed weighted graph with a per-node heuristic (0 when unset).
pub struct Graph {
    start: u8,
    goal: u8,
    edges: BTreeMap<u8, Vec<Edge>>,
    heuristic: BTreeMap<u8, Cost>,
}

impl Graph {
    pub fn new(start: u8, goal: u8, edges: &[(u8, u8, Cost)]) -> Self {
        let mut adjacency: BTreeMap<u8, Vec<Edge>> = BTreeMap::new();
        for &(from, to, cost) in edges {
            adjacency.entry(from).or_default().push(Edge { to, cost });
        }
        Self {
            start,
            goal,
            edges: adjacency,
            heuristic: BTreeMap::new(),
        }
    }

    pub fn with_heuristic(mut self, table: &[(u8, Cost)]) -> Self {
        self.heuristic = table.iter().copied().collect();
        self
    }
}

impl Problem for Graph {
    type State = u8;
    type Action = Edge;

    fn initial_state(&self) -> &u8 {
        &self.start
    }

    fn actions(&self, state: &u8) -> Vec<Edge> {
        self.edges.get(state).cloned().unwrap_or_default()
    }

    fn is_terminal(&self, state: &u8) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &u8) -> Cost {
        self.heuristic.get(state).copied().unwrap_or(0)
    }
}

/// Two routes to 3: a one-edge route of cost 10 and a three-edge route of
/// cost 3. Undirected edges between 1 and 2 add a cycle.
pub fn detour_graph() -> Graph {
    Graph::new(
        0,
        3,
        &[
            (0, 3, 10),
            (0, 1, 1),
            (1, 2, 1),
            (2, 1, 1),
            (2, 3, 1),
            (1, 0, 1),
        ],
    )
    .with_heuristic(&[(0, 3), (1, 2), (2, 1)])
}

/// A strongly connected component {0, 1, 2} with no edge into the goal 9.
pub fn unreachable_goal_graph() -> Graph {
    Graph::new(0, 9, &[(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 0, 1)])
}

/// Node 2 is first reached through an expensive edge and closed before the
/// cheap path to it is discovered, because the heuristic at 1 is
/// inconsistent (but still admissible).
pub fn reopening_graph() -> Graph {
    Graph::new(
        0,
        4,
        &[(0, 1, 1), (0, 2, 4), (1, 2, 1), (2, 3, 1), (3, 4, 4)],
    )
    .with_heuristic(&[(0, 0), (1, 5), (2, 0), (3, 4)])
}

/// Step one place along a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance;

impl Action for Advance {
    type State = u64;

    fn cost(&self) -> Cost {
        1
    }

    fn enact(&self, state: &u64) -> u64 {
        state + 1
    }
}

/// A single path `0 → 1 → … → length` with the exact remaining distance as
/// heuristic, so the optimal solution is as deep as the chain is long.
pub struct Chain {
    start: u64,
    length: u64,
}

impl Chain {
    pub fn new(length: u64) -> Self {
        Self { start: 0, length }
    }
}

impl Problem for Chain {
    type State = u64;
    type Action = Advance;

    fn initial_state(&self) -> &u64 {
        &self.start
    }

    fn actions(&self, state: &u64) -> Vec<Advance> {
        if *state < self.length {
            vec![Advance]
        } else {
            Vec::new()
        }
    }

    fn is_terminal(&self, state: &u64) -> bool {
        *state == self.length
    }

    fn heuristic(&self, state: &u64) -> Cost {
        self.length.saturating_sub(*state)
    }
}
