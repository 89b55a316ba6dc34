//! CLI command implementations.
//!
//! Every command reads a graph description file and returns the text to
//! print, either the human-readable rendering or a JSON document. The file
//! itself is never modified.

use std::path::Path;

use crate::format::{parse_label, GraphDescription};
use crate::graph::WeightedGraph;
use crate::types::{GraphError, GraphResult};

fn load(path: &Path) -> GraphResult<WeightedGraph> {
    GraphDescription::read_from_file(path)?.into_graph()
}

/// Resolve a start label, failing if it is not in the graph.
fn start_label(graph: &WeightedGraph, text: &str) -> GraphResult<char> {
    let label = parse_label(text)?;
    graph
        .find_node(label)
        .map(|_| label)
        .ok_or(GraphError::UnknownLabel(label))
}

fn to_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Summary of a description file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<String> {
    let graph = load(path)?;

    if json {
        Ok(to_json(&serde_json::json!({
            "file": path.display().to_string(),
            "capacity": graph.capacity(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "labels": graph.labels().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        })))
    } else {
        Ok(format!(
            "File: {}\nCapacity: {}\nNodes: {}\nEdges: {}",
            path.display(),
            graph.capacity(),
            graph.node_count(),
            graph.edge_count()
        ))
    }
}

/// Node labels in insertion order.
pub fn cmd_nodes(path: &Path, json: bool) -> GraphResult<String> {
    let graph = load(path)?;
    if json {
        let labels: Vec<String> = graph.labels().iter().map(|c| c.to_string()).collect();
        Ok(to_json(&serde_json::json!({ "nodes": labels })))
    } else {
        Ok(graph.list_nodes())
    }
}

/// Adjacency lists.
pub fn cmd_edges(path: &Path, json: bool) -> GraphResult<String> {
    let graph = load(path)?;
    if json {
        let adjacency: serde_json::Map<String, serde_json::Value> = graph
            .labels()
            .into_iter()
            .map(|label| {
                let neighbors: Vec<String> = graph
                    .neighbors(label)
                    .unwrap_or_default()
                    .iter()
                    .map(|c| c.to_string())
                    .collect();
                (label.to_string(), serde_json::json!(neighbors))
            })
            .collect();
        Ok(to_json(&serde_json::Value::Object(adjacency)))
    } else {
        Ok(graph.display_edges())
    }
}

/// Weight matrix.
pub fn cmd_matrix(path: &Path, json: bool) -> GraphResult<String> {
    let graph = load(path)?;
    if json {
        let labels = graph.labels();
        let rows: Vec<Vec<Option<i32>>> = labels
            .iter()
            .map(|&a| labels.iter().map(|&b| graph.weight(a, b)).collect())
            .collect();
        Ok(to_json(&serde_json::json!({
            "labels": labels.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "weights": rows,
        })))
    } else {
        Ok(graph.display_matrix())
    }
}

/// Depth-first traversal.
pub fn cmd_dfs(path: &Path, start: &str) -> GraphResult<String> {
    let mut graph = load(path)?;
    let start = start_label(&graph, start)?;
    Ok(graph.depth_first(start))
}

/// Breadth-first traversal.
pub fn cmd_bfs(path: &Path, start: &str) -> GraphResult<String> {
    let mut graph = load(path)?;
    let start = start_label(&graph, start)?;
    Ok(graph.breadth_first(start))
}

/// Minimum spanning tree.
pub fn cmd_mst(path: &Path, start: &str, json: bool) -> GraphResult<String> {
    let mut graph = load(path)?;
    let start = start_label(&graph, start)?;

    if json {
        let edges = graph
            .spanning_tree_edges(start)
            .ok_or(GraphError::UnknownLabel(start))?;
        let total: i64 = edges.iter().map(|e| i64::from(e.weight)).sum();
        Ok(to_json(&serde_json::json!({
            "start": start.to_string(),
            "edges": edges,
            "total_weight": total,
        })))
    } else {
        Ok(graph.minimum_spanning_tree(start))
    }
}
