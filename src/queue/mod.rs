//! Priority queue used for spanning tree edge selection.

pub mod edge_queue;

pub use edge_queue::EdgeQueue;
