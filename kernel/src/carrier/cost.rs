//! The cost scalar shared by actions, heuristics and solutions.
//!
//! Costs are unsigned so the non-negativity precondition of the search
//! engines holds by construction. Accumulation saturates at [`Cost::MAX`]
//! rather than wrapping.

/// Path, step and heuristic cost.
pub type Cost = u64;

/// Sum step costs, saturating at `Cost::MAX`.
#[must_use]
pub fn total_cost<I>(costs: I) -> Cost
where
    I: IntoIterator<Item = Cost>,
{
    costs.into_iter().fold(0, Cost::saturating_add)
}
