//! Indexed SSSP - indexed binary heap and Dijkstra shortest paths
//!
//! This library provides an array-backed binary heap augmented with a
//! key -> position map, so that entries can be looked up, re-prioritized and
//! removed by key in O(1)/O(log n), and a single-source shortest path engine
//! (Dijkstra) that drives it.
//!
//! Edge weights must be non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{IndexedHeap, IndexedMaxHeap, IndexedMinHeap};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Key is already present in the heap")]
    DuplicateKey,

    #[error("Key is not present in the heap")]
    KeyNotFound,

    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Distance overflows the weight type on edge from {from} to {to}")]
    DistanceOverflow { from: usize, to: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
