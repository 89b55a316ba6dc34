//! Fluent API for building WeightedGraph instances.

use crate::types::{GraphResult, DEFAULT_CAPACITY};

use super::WeightedGraph;

/// Fluent builder for constructing a WeightedGraph.
///
/// Unlike [`WeightedGraph::add_edge`], `build` fails on the first edge that
/// names an unknown node or connects a node to itself.
pub struct GraphBuilder {
    capacity: usize,
    nodes: Vec<char>,
    edges: Vec<(char, char, i32)>,
}

impl GraphBuilder {
    /// Create a new builder with the default capacity.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the node capacity of the built graph.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Add a node.
    pub fn node(mut self, label: char) -> Self {
        self.nodes.push(label);
        self
    }

    /// Add several nodes in order.
    pub fn nodes<I: IntoIterator<Item = char>>(mut self, labels: I) -> Self {
        self.nodes.extend(labels);
        self
    }

    /// Add a weighted edge between two nodes.
    pub fn edge(mut self, a: char, b: char, weight: i32) -> Self {
        self.edges.push((a, b, weight));
        self
    }

    /// Build the final WeightedGraph.
    ///
    /// Fails with `CapacityTooLarge` if the capacity exceeds `MAX_CAPACITY`.
    pub fn build(self) -> GraphResult<WeightedGraph> {
        let mut graph = WeightedGraph::try_with_capacity(self.capacity)?;
        for label in self.nodes {
            graph.add_node(label)?;
        }
        for (a, b, weight) in self.edges {
            graph.try_add_edge(a, b, weight)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
