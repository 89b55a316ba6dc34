//! Command implementations behind the `wgraph` binary.

pub mod commands;
