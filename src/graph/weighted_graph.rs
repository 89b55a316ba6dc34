//! Core graph structure — labeled nodes, an edge arena and a weight matrix.

use std::fmt::Write;

use crate::types::{
    Adjacency, Edge, EdgeId, GraphError, GraphResult, Node, DEFAULT_CAPACITY, MAX_CAPACITY,
};

/// A weighted, undirected graph with a fixed node capacity.
///
/// Each connection is stored twice: as a pair of [`Edge`] records chained
/// into the adjacency lists of both endpoints, and as two symmetric cells of
/// the weight matrix. Both views are updated together.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    /// Nodes in insertion order; the position is the node's index.
    pub(crate) nodes: Vec<Node>,
    /// Edge arena; adjacency lists link into it by handle.
    pub(crate) edges: Vec<Edge>,
    /// Row-major `capacity * capacity` weight matrix. `None` means no edge.
    matrix: Vec<Option<i32>>,
    /// Maximum number of nodes.
    capacity: usize,
}

impl WeightedGraph {
    /// Create an empty graph holding up to [`DEFAULT_CAPACITY`] nodes.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty graph holding up to `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`]. Use
    /// [`try_with_capacity`](Self::try_with_capacity) for untrusted input.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(graph) => graph,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create an empty graph holding up to `capacity` nodes, rejecting
    /// capacities above [`MAX_CAPACITY`].
    pub fn try_with_capacity(capacity: usize) -> GraphResult<Self> {
        let too_large = GraphError::CapacityTooLarge {
            requested: capacity,
            max: MAX_CAPACITY,
        };
        if capacity > MAX_CAPACITY {
            return Err(too_large);
        }
        let cells = capacity.checked_mul(capacity).ok_or(too_large)?;
        Ok(Self {
            nodes: Vec::with_capacity(capacity),
            edges: Vec::new(),
            matrix: vec![None; cells],
            capacity,
        })
    }

    /// Maximum number of nodes this graph accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> Vec<char> {
        self.nodes.iter().map(|n| n.label).collect()
    }

    /// All nodes (immutable slice).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Add a node, returning its index.
    pub fn add_node(&mut self, label: char) -> GraphResult<usize> {
        if self.nodes.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.find_node(label).is_some() {
            return Err(GraphError::DuplicateLabel(label));
        }

        let index = self.nodes.len();
        self.nodes.push(Node::new(label));
        log::debug!("added node '{}' at index {}", label, index);
        Ok(index)
    }

    /// Connect two nodes with a weighted edge.
    ///
    /// Returns `false` without touching the graph if either label is unknown
    /// or both labels are the same.
    pub fn add_edge(&mut self, a: char, b: char, weight: i32) -> bool {
        match self.try_add_edge(a, b, weight) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("rejected edge {}-{}: {}", a, b, e);
                false
            }
        }
    }

    /// Connect two nodes, reporting why the edge was rejected.
    ///
    /// Re-adding an existing connection overwrites its weight on both halves.
    pub fn try_add_edge(&mut self, a: char, b: char, weight: i32) -> GraphResult<()> {
        if a == b {
            return Err(GraphError::SelfEdge(a));
        }
        let from = self.find_node(a).ok_or(GraphError::UnknownLabel(a))?;
        let to = self.find_node(b).ok_or(GraphError::UnknownLabel(b))?;

        if self.matrix[self.cell(from, to)].is_some() {
            for edge in self.edges.iter_mut() {
                if (edge.source, edge.target) == (from, to)
                    || (edge.source, edge.target) == (to, from)
                {
                    edge.weight = weight;
                }
            }
            log::debug!("updated edge {}-{} to weight {}", a, b, weight);
        } else {
            self.link(from, to, weight);
            self.link(to, from, weight);
            log::debug!("added edge {}-{} with weight {}", a, b, weight);
        }

        let (ab, ba) = (self.cell(from, to), self.cell(to, from));
        self.matrix[ab] = Some(weight);
        self.matrix[ba] = Some(weight);
        Ok(())
    }

    /// Linear search for a node with this label.
    pub fn find_node(&self, label: char) -> Option<usize> {
        self.nodes.iter().position(|n| n.label == label)
    }

    /// Weight of the edge between two labels, if they are connected.
    pub fn weight(&self, a: char, b: char) -> Option<i32> {
        let from = self.find_node(a)?;
        let to = self.find_node(b)?;
        self.matrix[self.cell(from, to)]
    }

    /// Neighbor labels in adjacency-list order (most recent edge first).
    pub fn neighbors(&self, label: char) -> Option<Vec<char>> {
        let index = self.find_node(label)?;
        Some(
            self.adjacency(index)
                .map(|e| self.nodes[e.target].label)
                .collect(),
        )
    }

    /// Whether the node is currently marked visited.
    pub fn is_visited(&self, label: char) -> Option<bool> {
        self.find_node(label).map(|i| self.nodes[i].visited)
    }

    /// Mark every node unvisited.
    pub fn reset_visited(&mut self) {
        for node in self.nodes.iter_mut() {
            node.visited = false;
        }
    }

    /// Space-separated labels in insertion order.
    pub fn list_nodes(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            out.push(node.label);
            out.push(' ');
        }
        out
    }

    /// One line per node: its label, a dash, then its neighbors.
    pub fn display_edges(&self) -> String {
        let mut out = String::new();
        for (index, node) in self.nodes.iter().enumerate() {
            out.push(node.label);
            out.push('-');
            for edge in self.adjacency(index) {
                out.push(self.nodes[edge.target].label);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Weight matrix as a fixed-width grid; `0` marks a missing edge.
    pub fn display_matrix(&self) -> String {
        let mut out = String::new();

        let _ = write!(out, "{:>2}", " ");
        for node in &self.nodes {
            let _ = write!(out, "{:>4}", node.label);
        }
        out.push('\n');

        for (i, node) in self.nodes.iter().enumerate() {
            let _ = write!(out, "{:>2}", node.label);
            for j in 0..self.nodes.len() {
                let _ = write!(out, "{:>4}", self.matrix[self.cell(i, j)].unwrap_or(0));
            }
            out.push('\n');
        }
        out
    }

    /// Edges of the node at `index`, most recently inserted first.
    pub(crate) fn adjacency(&self, index: usize) -> Adjacency<'_> {
        Adjacency::new(&self.edges, self.nodes[index].head)
    }

    /// Push a new edge onto the head of `from`'s adjacency list.
    fn link(&mut self, from: usize, to: usize, weight: i32) -> EdgeId {
        let id = self.edges.len();
        let mut edge = Edge::new(from, to, weight);
        edge.next = self.nodes[from].head;
        self.edges.push(edge);
        self.nodes[from].head = Some(id);
        id
    }

    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.capacity + col
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}
