//! World implementations for the harness runner.

pub mod route_map;
pub mod sliding_tile;
