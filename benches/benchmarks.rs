//! Criterion benchmarks for the weighted graph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use weighted_graph::graph::WeightedGraph;

/// Labels drawn from a contiguous block of printable characters.
fn label(i: usize) -> char {
    char::from_u32(0x4E00 + i as u32).unwrap()
}

/// Build a connected random graph: a spanning path plus random extra edges.
fn make_random_graph(node_count: usize, extra_edges: usize) -> WeightedGraph {
    let mut rng = rand::thread_rng();
    let mut graph = WeightedGraph::with_capacity(node_count);
    for i in 0..node_count {
        graph.add_node(label(i)).unwrap();
    }
    for i in 1..node_count {
        graph.add_edge(label(i - 1), label(i), rng.gen_range(1..100));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        graph.add_edge(label(a), label(b), rng.gen_range(1..100));
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    c.bench_function("add_edge_200_nodes_1000_edges", |b| {
        b.iter(|| make_random_graph(200, 1000));
    });
}

fn bench_traversals(c: &mut Criterion) {
    let mut graph = make_random_graph(200, 1000);
    let start = label(0);

    c.bench_function("breadth_first_200_nodes", |b| {
        b.iter(|| graph.breadth_first(start));
    });

    c.bench_function("depth_first_200_nodes", |b| {
        b.iter(|| {
            let out = graph.depth_first(start);
            graph.reset_visited();
            out
        });
    });
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut graph = make_random_graph(200, 1000);
    let start = label(0);

    c.bench_function("minimum_spanning_tree_200_nodes", |b| {
        b.iter(|| graph.spanning_tree_edges(start));
    });
}

criterion_group!(benches, bench_add_edge, bench_traversals, bench_spanning_tree);
criterion_main!(benches);
