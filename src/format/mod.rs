//! JSON description files for weighted graphs.

pub mod description;

pub use description::{parse_label, EdgeDescription, GraphDescription};
