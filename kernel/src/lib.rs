//! Sextant Kernel: the domain contracts consumed by the search engine.
//!
//! # API Surface
//!
//! - [`carrier::state::SearchState`] -- an immutable, hashable world configuration
//! - [`operators::action::Action`] -- a cost-bearing transformation between states
//! - [`problem::Problem`] -- initial state, action enumeration, terminal test, heuristic
//! - [`proof::replay::replay_verify`] -- verify an action sequence by deterministic replay
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `problem` ← `proof`
//!
//! One-way only. No cycles. The kernel knows nothing about search strategies.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod problem;
pub mod proof;
