//! Search nodes, the node arena, and the frontier ordering key.

use sextant_kernel::carrier::cost::Cost;

/// Handle of a node inside a [`NodeArena`].
pub type NodeId = usize;

/// A search node owned by the best-first engine.
///
/// Ordering for frontier extraction uses `(f_cost, g_cost desc, node_id)`
/// where `f_cost = g_cost + h_cost`. Lower `f_cost` is better; ties prefer the
/// node with the larger `g_cost` (closer to completion), then the older node.
/// Arena handles are issued in creation order, so `node_id` doubles as the
/// creation counter.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Position of this node in its arena, which is also its creation order.
    pub node_id: NodeId,
    /// Parent node handle (`None` for root).
    pub parent_id: Option<NodeId>,
    /// Full immutable state at this node.
    pub state: S,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the root.
    pub g_cost: Cost,
    /// Heuristic estimate of the remaining cost.
    pub h_cost: Cost,
    /// The action that produced this node from its parent.
    pub producing_action: Option<A>,
}

impl<S, A> SearchNode<S, A> {
    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> Cost {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Append-only node storage for one best-first search call.
///
/// Predecessor links are [`NodeId`] handles into this arena, so superseded
/// nodes stay addressable for path reconstruction without shared ownership.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert the root node (`g = 0`, no parent, no action).
    pub fn push_root(&mut self, state: S, h_cost: Cost) -> NodeId {
        self.insert(None, state, None, 0, h_cost)
    }

    /// Insert a child of `parent_id` reached by `action` at path cost `g_cost`.
    ///
    /// # Panics
    ///
    /// Panics if `parent_id` was not issued by this arena.
    pub fn push_child(
        &mut self,
        parent_id: NodeId,
        state: S,
        action: A,
        g_cost: Cost,
        h_cost: Cost,
    ) -> NodeId {
        self.insert(Some(parent_id), state, Some(action), g_cost, h_cost)
    }

    fn insert(
        &mut self,
        parent_id: Option<NodeId>,
        state: S,
        producing_action: Option<A>,
        g_cost: Cost,
        h_cost: Cost,
    ) -> NodeId {
        let node_id = self.nodes.len();
        let depth = parent_id.map_or(0, |p| self.nodes[p].depth + 1);
        self.nodes.push(SearchNode {
            node_id,
            parent_id,
            state,
            depth,
            g_cost,
            h_cost,
            producing_action,
        });
        node_id
    }

    /// Borrow a node by handle.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, node_id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[node_id]
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node handles from the root to `node_id`, inclusive.
    #[must_use]
    pub fn path_to(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(node_id);

        while let Some(id) = current {
            path.push(id);
            current = self.nodes[id].parent_id;
        }

        path.reverse();
        path
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// The frontier ordering key: `(f_cost, g_cost, creation_order)`.
///
/// Lower `f_cost` first, then higher `g_cost`, then older `creation_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: Cost,
    pub g_cost: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(other.g_cost.cmp(&self.g_cost))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<S, A> From<&SearchNode<S, A>> for FrontierKey {
    fn from(node: &SearchNode<S, A>) -> Self {
        Self {
            f_cost: node.f_cost(),
            g_cost: node.g_cost,
            creation_order: node.node_id as u64,
        }
    }
}
