//! Reference minimum-cost search (Dijkstra) over any [`Problem`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::operators::action::Action;
use sextant_kernel::problem::Problem;

/// Minimum total cost from the initial state to any terminal state, or
/// `None` if no terminal state is reachable.
///
/// Ignores the heuristic entirely. States are keyed by insertion index so the
/// heap never needs to order states themselves.
pub fn min_cost<P: Problem>(problem: &P) -> Option<Cost> {
    let mut best: HashMap<P::State, Cost> = HashMap::new();
    let mut states: Vec<P::State> = Vec::new();
    let mut heap: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();

    let root = problem.initial_state().clone();
    best.insert(root.clone(), 0);
    states.push(root);
    heap.push(Reverse((0, 0)));

    while let Some(Reverse((g, index))) = heap.pop() {
        let state = states[index].clone();
        if best.get(&state).is_some_and(|&known| known < g) {
            continue;
        }
        if problem.is_terminal(&state) {
            return Some(g);
        }
        for action in problem.actions(&state) {
            let next = action.enact(&state);
            let next_g = g.saturating_add(action.cost());
            if best.get(&next).is_some_and(|&known| known <= next_g) {
                continue;
            }
            best.insert(next.clone(), next_g);
            states.push(next);
            heap.push(Reverse((next_g, states.len() - 1)));
        }
    }
    None
}

/// Number of states reachable from the initial state.
pub fn reachable_count<P: Problem>(problem: &P) -> usize {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![problem.initial_state().clone()];
    seen.insert(problem.initial_state().clone());
    while let Some(state) = stack.pop() {
        for action in problem.actions(&state) {
            let next = action.enact(&state);
            if seen.insert(next.clone()) {
                stack.push(next);
            }
        }
    }
    seen.len()
}
