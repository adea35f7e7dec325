//! Operators module: the `Action` contract and sequential application.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod action;
pub mod apply;
