//! In-memory weighted graph and its algorithms.

pub mod builder;
pub mod spanning_tree;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use spanning_tree::SpanningEdge;
pub use weighted_graph::WeightedGraph;
