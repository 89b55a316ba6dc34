//! Min-ordered queue of borrowed edges.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::Edge;

/// Heap slot: an edge plus the order in which it was queued.
struct Entry<'a> {
    edge: &'a Edge,
    seq: u64,
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry<'_> {
    // Reversed so that `BinaryHeap` (a max-heap) yields the lightest edge,
    // and among equal weights the one queued first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .edge
            .weight
            .cmp(&self.edge.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A minimum priority queue over edge references, keyed on weight.
///
/// Edges with equal weight come out in the order they were inserted. The
/// queue never owns its edges; they stay in the graph's arena and must
/// outlive the queue.
#[derive(Default)]
pub struct EdgeQueue<'a> {
    heap: BinaryHeap<Entry<'a>>,
    next_seq: u64,
}

impl<'a> EdgeQueue<'a> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue a single edge.
    pub fn insert_edge(&mut self, edge: &'a Edge) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { edge, seq });
    }

    /// Queue every edge of an adjacency list, in list order.
    pub fn insert_adjacency_list<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        for edge in edges {
            self.insert_edge(edge);
        }
    }

    /// Remove and return the lightest edge, or `None` if the queue is empty.
    pub fn remove_min(&mut self) -> Option<&'a Edge> {
        self.heap.pop().map(|entry| entry.edge)
    }

    /// Whether any edges remain.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued edges.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_min_orders_by_weight() {
        let edges = [Edge::new(0, 1, 10), Edge::new(0, 2, 3), Edge::new(0, 3, 7)];
        let mut pq = EdgeQueue::new();
        for edge in &edges {
            pq.insert_edge(edge);
        }

        let weights: Vec<i32> = std::iter::from_fn(|| pq.remove_min())
            .map(|e| e.weight)
            .collect();
        assert_eq!(weights, vec![3, 7, 10]);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_equal_weights_pop_in_insertion_order() {
        let edges = [Edge::new(0, 1, 5), Edge::new(0, 2, 5), Edge::new(0, 3, 5)];
        let mut pq = EdgeQueue::new();
        pq.insert_adjacency_list(edges.iter());

        assert_eq!(pq.len(), 3);
        assert_eq!(pq.remove_min().map(|e| e.target), Some(1));
        assert_eq!(pq.remove_min().map(|e| e.target), Some(2));
        assert_eq!(pq.remove_min().map(|e| e.target), Some(3));
    }

    #[test]
    fn test_remove_min_on_empty_queue() {
        let mut pq = EdgeQueue::new();
        assert!(pq.is_empty());
        assert!(pq.remove_min().is_none());
    }

    #[test]
    fn test_negative_and_zero_weights() {
        let edges = [Edge::new(0, 1, 0), Edge::new(0, 2, -4), Edge::new(0, 3, 2)];
        let mut pq = EdgeQueue::new();
        pq.insert_adjacency_list(&edges);

        assert_eq!(pq.remove_min().map(|e| e.weight), Some(-4));
        assert_eq!(pq.remove_min().map(|e| e.weight), Some(0));
        assert_eq!(pq.remove_min().map(|e| e.weight), Some(2));
    }
}
