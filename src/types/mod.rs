//! All data types for the weighted graph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::{Adjacency, Edge, EdgeId};
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Node capacity used when a graph is created without an explicit one.
pub const DEFAULT_CAPACITY: usize = 20;

/// Largest node capacity a graph accepts (the weight matrix is capacity squared).
pub const MAX_CAPACITY: usize = 1024;
