//! The `Problem` contract: the passive side of a search.
//!
//! A problem binds one initial state to a domain. The engine calls into it
//! to enumerate actions, test for terminal states and estimate remaining
//! cost; the problem never drives the search itself.

use crate::carrier::cost::Cost;
use crate::carrier::state::SearchState;
use crate::operators::action::Action;

/// A search problem over `Self::State`.
///
/// # Contract
///
/// - Calls are stateless: the same state always yields the same actions (in
///   the same order), the same terminal verdict and the same heuristic.
/// - `heuristic` must be admissible (never exceed the true remaining cost)
///   for the engines' optimality guarantee to hold. This is not checked.
/// - A single problem may be shared by concurrent solve calls, so
///   implementations should not rely on interior mutability.
pub trait Problem {
    /// World configuration type.
    type State: SearchState;
    /// Transformation type over [`Problem::State`].
    type Action: Action<State = Self::State>;

    /// The state every search starts from.
    fn initial_state(&self) -> &Self::State;

    /// Legal actions from `state`, in a deterministic order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Whether `state` is a goal.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Admissible estimate of the cost from `state` to the nearest goal.
    fn heuristic(&self, state: &Self::State) -> Cost;
}
