//! Shared helpers for the cross-crate lock tests.
//!
//! The lock tests hold the engines to an independent reference: every cost
//! they report is compared against a plain uniform-cost search that uses no
//! heuristic and no code from `sextant_search`.

pub mod fixtures;
pub mod oracle;
