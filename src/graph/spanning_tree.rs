//! Minimum-cost spanning tree (Prim's algorithm).

use serde::Serialize;

use crate::queue::EdgeQueue;
use crate::types::{Adjacency, Edge};

use super::WeightedGraph;

/// One edge selected for the spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpanningEdge {
    /// Label of the already-reached endpoint.
    pub from: char,
    /// Label of the endpoint this edge brought into the tree.
    pub to: char,
    pub weight: i32,
}

impl WeightedGraph {
    /// Edges of the minimum spanning tree grown from `start`, in the order
    /// they were selected.
    ///
    /// Nodes not reachable from `start` are left out. Returns `None` if
    /// `start` is not in the graph. Visited flags are cleared on return.
    pub fn spanning_tree_edges(&mut self, start: char) -> Option<Vec<SpanningEdge>> {
        let index = self.find_node(start)?;
        let mut selected = Vec::new();

        {
            let Self { nodes, edges, .. } = &mut *self;
            let edges: &[Edge] = edges;

            let mut queue = EdgeQueue::new();
            nodes[index].visited = true;
            queue.insert_adjacency_list(Adjacency::new(edges, nodes[index].head));

            while let Some(shortest) = queue.remove_min() {
                let reached = shortest.target;
                // Queued before its far end was reached by a lighter edge.
                if nodes[reached].visited {
                    continue;
                }
                nodes[reached].visited = true;
                selected.push(SpanningEdge {
                    from: nodes[shortest.source].label,
                    to: nodes[reached].label,
                    weight: shortest.weight,
                });

                for edge in Adjacency::new(edges, nodes[reached].head) {
                    if !nodes[edge.target].visited {
                        queue.insert_edge(edge);
                    }
                }
            }
        }

        self.reset_visited();
        log::debug!(
            "spanning tree from '{}' selected {} edges",
            start,
            selected.len()
        );
        Some(selected)
    }

    /// Minimum spanning tree from `start` rendered as `"X : A-B B-C "`.
    ///
    /// Returns an empty string if `start` is not in the graph.
    pub fn minimum_spanning_tree(&mut self, start: char) -> String {
        let Some(selected) = self.spanning_tree_edges(start) else {
            log::debug!("spanning tree start '{}' not found", start);
            return String::new();
        };

        let mut out = format!("{} : ", start);
        for edge in &selected {
            out.push(edge.from);
            out.push('-');
            out.push(edge.to);
            out.push(' ');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_equal_weights_follow_queue_order() {
        let mut graph = GraphBuilder::new()
            .nodes("ABC".chars())
            .edge('A', 'B', 1)
            .edge('A', 'C', 1)
            .edge('B', 'C', 1)
            .build()
            .unwrap();
        // A's list is C then B, so A-C is queued first and wins the tie.
        assert_eq!(graph.minimum_spanning_tree('A'), "A : A-C A-B ");
    }

    #[test]
    fn test_zero_weight_edges_are_selected() {
        let mut graph = GraphBuilder::new()
            .nodes("ABC".chars())
            .edge('A', 'B', 5)
            .edge('A', 'C', 0)
            .edge('B', 'C', 0)
            .build()
            .unwrap();
        let tree = graph.spanning_tree_edges('A').unwrap();
        assert_eq!(
            tree,
            vec![
                SpanningEdge { from: 'A', to: 'C', weight: 0 },
                SpanningEdge { from: 'C', to: 'B', weight: 0 },
            ]
        );
    }

    #[test]
    fn test_disconnected_nodes_are_left_out() {
        let mut graph = GraphBuilder::new()
            .nodes("ABC".chars())
            .edge('A', 'B', 3)
            .build()
            .unwrap();
        assert_eq!(graph.minimum_spanning_tree('A'), "A : A-B ");
        assert_eq!(graph.minimum_spanning_tree('C'), "C : ");
        assert_eq!(graph.is_visited('A'), Some(false));
    }

    #[test]
    fn test_unknown_start() {
        let mut graph = GraphBuilder::new().nodes("AB".chars()).build().unwrap();
        assert!(graph.spanning_tree_edges('Z').is_none());
        assert_eq!(graph.minimum_spanning_tree('Z'), "");
    }
}
