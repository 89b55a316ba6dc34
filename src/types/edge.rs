//! The edge record stored in the graph's edge arena.

/// Handle of an edge inside the graph's edge arena.
pub type EdgeId = usize;

/// One directed half of an undirected weighted connection.
///
/// Edges are chained through `next` into the adjacency list of the node at
/// `source`. The matching reverse half lives on the node at `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the node owning this edge.
    pub source: usize,
    /// Index of the node this edge leads to.
    pub target: usize,
    /// Connection weight, shared with the reverse half.
    pub weight: i32,
    /// Next edge in the owning node's adjacency list.
    pub next: Option<EdgeId>,
}

impl Edge {
    /// Create an edge that is not yet linked into any list.
    pub fn new(source: usize, target: usize, weight: i32) -> Self {
        Self {
            source,
            target,
            weight,
            next: None,
        }
    }
}

/// Iterator over an adjacency list, following `next` handles from a head.
pub struct Adjacency<'a> {
    arena: &'a [Edge],
    cursor: Option<EdgeId>,
}

impl<'a> Adjacency<'a> {
    pub(crate) fn new(arena: &'a [Edge], head: Option<EdgeId>) -> Self {
        Self {
            arena,
            cursor: head,
        }
    }
}

impl<'a> Iterator for Adjacency<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.arena.get(self.cursor?)?;
        self.cursor = edge.next;
        Some(edge)
    }
}
