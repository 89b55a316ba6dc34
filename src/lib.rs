//! Weighted graph — a small in-memory weighted, undirected graph.
//!
//! Nodes are single-character labels; connections carry integer weights and
//! are kept both as per-node adjacency lists and as a weight matrix. The
//! graph supports depth-first and breadth-first traversal and grows minimum
//! spanning trees with Prim's algorithm over an [`EdgeQueue`].

pub mod cli;
pub mod format;
pub mod graph;
pub mod queue;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{EdgeDescription, GraphDescription};
pub use graph::{GraphBuilder, SpanningEdge, WeightedGraph};
pub use queue::EdgeQueue;
pub use types::{Edge, EdgeId, GraphError, GraphResult, Node, DEFAULT_CAPACITY, MAX_CAPACITY};
