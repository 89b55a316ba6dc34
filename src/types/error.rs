//! Error types for the weighted graph library.

use thiserror::Error;

/// All errors that can occur in the weighted graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The graph already holds as many nodes as it was built for.
    #[error("Graph size exceeded: capacity is {capacity} nodes")]
    CapacityExceeded { capacity: usize },

    /// Requested capacity is larger than the graph supports.
    #[error("Capacity too large: {requested} > {max}")]
    CapacityTooLarge { requested: usize, max: usize },

    /// A node with this label already exists.
    #[error("Node '{0}' already exists")]
    DuplicateLabel(char),

    /// No node carries this label.
    #[error("Node '{0}' not found")]
    UnknownLabel(char),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on node '{0}'")]
    SelfEdge(char),

    /// A label in a description file is not exactly one character.
    #[error("Invalid node label: {0:?}")]
    InvalidLabel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph description.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
