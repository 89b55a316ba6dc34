//! Graph vertices.

use super::EdgeId;

/// A labeled vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique single-character label.
    pub label: char,
    /// Traversal progress marker.
    pub visited: bool,
    /// Most recently inserted edge of this node, if any.
    pub head: Option<EdgeId>,
}

impl Node {
    /// Create an unvisited node with no edges.
    pub fn new(label: char) -> Self {
        Self {
            label,
            visited: false,
            head: None,
        }
    }
}
