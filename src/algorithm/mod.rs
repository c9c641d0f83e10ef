pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod batch;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use batch::{all_pairs, distances_from_sources};
