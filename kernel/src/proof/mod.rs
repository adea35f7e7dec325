//! Proof module: replay verification of solution paths.
//!
//! Depends on `carrier`, `operators` and `problem`. Nothing depends on `proof` within the kernel.

pub mod replay;
