//! Carrier module: the state capability and the cost scalar.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod cost;
pub mod state;
