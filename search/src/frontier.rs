//! Best-first frontier: open set with lazy deletion plus the closed set.
//!
//! The open set is a `BinaryHeap` of `(FrontierKey, NodeId)` entries backed
//! by a `HashMap` from state to its best known `(g, node)`. When a cheaper
//! path to an open state is found, a new entry is pushed and the map is
//! updated; the superseded heap entry is discarded when it surfaces.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::carrier::state::SearchState;

use crate::node::{FrontierKey, NodeArena, NodeId};

/// A heap entry wrapping a node handle with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: NodeId,
}

/// What the frontier decided about a rediscovered (or new) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Never seen before.
    New,
    /// Already open, and the new path is cheaper.
    Improved,
    /// Already expanded, and the new path is cheaper; the state is reopened.
    Reopened,
    /// Already open or closed with a path at least as cheap.
    Suppressed,
}

impl Admission {
    /// Whether the caller should create a node and push it.
    #[must_use]
    pub fn is_admitted(self) -> bool {
        !matches!(self, Self::Suppressed)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A `HashMap<S, (Cost, NodeId)>` of open states and their live node
/// - A `HashMap<S, Cost>` of closed (expanded) states and their best `g`
pub struct BestFirstFrontier<S> {
    heap: BinaryHeap<FrontierEntry>,
    open: HashMap<S, (Cost, NodeId)>,
    closed: HashMap<S, Cost>,
    high_water: u64,
    stale_pops: u64,
}

impl<S: SearchState> BestFirstFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            open: HashMap::new(),
            closed: HashMap::new(),
            high_water: 0,
            stale_pops: 0,
        }
    }

    /// Decide whether `state` reached at path cost `g_cost` improves on what
    /// is already known.
    ///
    /// A reopened state is removed from the closed set here; the caller is
    /// expected to follow up with [`BestFirstFrontier::push`].
    pub fn admit(&mut self, state: &S, g_cost: Cost) -> Admission {
        if let Some(&closed_g) = self.closed.get(state) {
            if closed_g <= g_cost {
                return Admission::Suppressed;
            }
            self.closed.remove(state);
            return Admission::Reopened;
        }
        match self.open.get(state) {
            Some(&(open_g, _)) if open_g <= g_cost => Admission::Suppressed,
            Some(_) => Admission::Improved,
            None => Admission::New,
        }
    }

    /// Push a node onto the frontier, superseding any open entry for `state`.
    pub fn push(&mut self, state: S, key: FrontierKey, node_id: NodeId) {
        self.open.insert(state, (key.g_cost, node_id));
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.open.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best live node, skipping superseded heap entries.
    ///
    /// The popped state leaves the open set; it is not closed until the
    /// engine calls [`BestFirstFrontier::close`].
    pub fn pop<A>(&mut self, arena: &NodeArena<S, A>) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let state = &arena.get(entry.node_id).state;
            match self.open.get(state) {
                Some(&(_, live)) if live == entry.node_id => {
                    self.open.remove(state);
                    return Some(entry.node_id);
                }
                _ => self.stale_pops += 1,
            }
        }
        None
    }

    /// Record `state` as expanded with path cost `g_cost`.
    pub fn close(&mut self, state: S, g_cost: Cost) {
        self.closed.insert(state, g_cost);
    }

    /// Best known `g` for a closed state.
    #[must_use]
    pub fn closed_cost(&self, state: &S) -> Option<Cost> {
        self.closed.get(state).copied()
    }

    /// Number of live open states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no live open state remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of closed states.
    #[must_use]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// High-water mark of live open states.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Superseded heap entries discarded so far.
    #[must_use]
    pub fn stale_pops(&self) -> u64 {
        self.stale_pops
    }
}

impl<S: SearchState> Default for BestFirstFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
