//! Reads graph description files.
//!
//! A description lists node labels in insertion order and connections in the
//! order they are added. Descriptions are input only; graphs are never
//! written back.

use std::path::Path;

use serde::Deserialize;

use crate::graph::{GraphBuilder, WeightedGraph};
use crate::types::{GraphError, GraphResult};

/// One undirected connection in a description file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    pub weight: i32,
}

/// Declarative input for building a [`WeightedGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GraphDescription {
    /// Node capacity; the library default when omitted.
    #[serde(default)]
    pub capacity: Option<usize>,
    /// Single-character labels in insertion order.
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

/// Parse a node label that must be exactly one character.
pub fn parse_label(text: &str) -> GraphResult<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Ok(label),
        _ => Err(GraphError::InvalidLabel(text.to_string())),
    }
}

impl GraphDescription {
    /// Build the described graph, failing on the first invalid node or edge.
    pub fn into_graph(self) -> GraphResult<WeightedGraph> {
        let mut builder = GraphBuilder::new();
        if let Some(capacity) = self.capacity {
            builder = builder.capacity(capacity);
        }
        for node in &self.nodes {
            builder = builder.node(parse_label(node)?);
        }
        for edge in &self.edges {
            builder = builder.edge(parse_label(&edge.from)?, parse_label(&edge.to)?, edge.weight);
        }
        builder.build()
    }

    /// Parse a description from JSON text.
    pub fn from_json_str(text: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a description file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("read graph description from {}", path.display());
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("A").unwrap(), 'A');
        assert_eq!(parse_label("é").unwrap(), 'é');
        assert!(matches!(parse_label(""), Err(GraphError::InvalidLabel(_))));
        assert!(matches!(parse_label("AB"), Err(GraphError::InvalidLabel(_))));
    }

    #[test]
    fn test_missing_fields_default() {
        let desc = GraphDescription::from_json_str(r#"{"nodes": ["A"]}"#).unwrap();
        assert_eq!(desc.capacity, None);
        assert!(desc.edges.is_empty());
        let graph = desc.into_graph().unwrap();
        assert_eq!(graph.capacity(), crate::types::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_load_keeps_edge_order() {
        let json = r#"{"nodes": ["P", "Q", "R"], "edges": [
            {"from": "Q", "to": "P", "weight": 2},
            {"from": "P", "to": "R", "weight": 7}
        ]}"#;
        let graph = GraphDescription::from_json_str(json)
            .unwrap()
            .into_graph()
            .unwrap();
        assert_eq!(graph.neighbors('P'), Some(vec!['R', 'Q']));
        assert_eq!(graph.weight('P', 'Q'), Some(2));
    }

    #[test]
    fn test_oversized_capacity_is_an_error() {
        let json = r#"{"capacity": 4294967296, "nodes": ["A"]}"#;
        let desc = GraphDescription::from_json_str(json).unwrap();
        assert!(matches!(
            desc.into_graph(),
            Err(GraphError::CapacityTooLarge { requested: 4294967296, .. })
        ));
    }

    #[test]
    fn test_bad_edge_is_an_error() {
        let json = r#"{"nodes": ["A", "B"], "edges": [{"from": "A", "to": "C", "weight": 1}]}"#;
        let desc = GraphDescription::from_json_str(json).unwrap();
        assert!(matches!(
            desc.into_graph(),
            Err(GraphError::UnknownLabel('C'))
        ));
    }
}
