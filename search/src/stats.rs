//! Search counters.
//!
//! Purely observational: nothing in the engines branches on these values
//! except the expansion budget check.

use serde::Serialize;

use sextant_kernel::carrier::cost::Cost;

/// Counters collected during one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose successors were enumerated.
    pub expansions: u64,
    /// Successor states produced by enacting actions.
    pub generated: u64,
    /// Successors rejected as no improvement (best-first) or already on the
    /// current path (IDA*).
    pub duplicates_suppressed: u64,
    /// Closed states reopened because a cheaper path was found.
    pub reopened: u64,
    /// Superseded open-set entries discarded on pop.
    pub stale_pops: u64,
    /// Peak open-set size (best-first) or peak path length (IDA*).
    pub frontier_high_water: u64,
    /// Bounded passes performed (always 1 for best-first).
    pub iterations: u64,
    /// Cost bound of the last IDA* pass.
    pub final_bound: Option<Cost>,
    /// Deepest node reached.
    pub max_depth: u32,
}

impl SearchStats {
    pub(crate) fn observe_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}
