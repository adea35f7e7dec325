//! Sextant Search: optimal-cost search over any `Problem`.
//!
//! This crate provides the search layer. It depends only on
//! `sextant_kernel`; it does NOT depend on `sextant_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! sextant_kernel  ←  sextant_search  ←  sextant_harness
//! (contracts)        (engines, nodes)    (worlds, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] -- arena entry with `g`, `h`, parent handle and producing action
//! - [`BestFirstFrontier`] -- open set with lazy deletion plus closed set
//! - [`Strategy`] / [`SearchPolicy`] -- engine selection and expansion budget
//! - [`Solution`] -- ordered action sequence and total cost
//! - [`search`] / [`find_solution`] -- entry points
//!
//! [`SearchNode`]: node::SearchNode
//! [`BestFirstFrontier`]: frontier::BestFirstFrontier
//! [`Strategy`]: policy::Strategy
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`Solution`]: solution::Solution
//! [`search`]: search::search
//! [`find_solution`]: search::find_solution

#![forbid(unsafe_code)]

pub mod astar;
pub mod error;
pub mod frontier;
pub mod ida;
pub mod node;
pub mod policy;
pub mod search;
pub mod solution;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_worlds;
