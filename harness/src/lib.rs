//! Sextant Harness: concrete worlds and orchestration around the engines.
//!
//! The harness supplies problem domains that satisfy the kernel contracts,
//! runs them through `sextant_search`, and times repeated solves. It does NOT
//! implement search logic; it delegates to the search crate. Worlds provide
//! domain data only; the runner owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod runner;
pub mod worlds;
