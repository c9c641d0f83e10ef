use std::collections::HashSet;

use log::warn;

use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `None` for unreached vertices
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `vertex`, if it was reached
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Distances with unreached vertices replaced by `unreached`, e.g. `-1`
    pub fn distances_or(&self, unreached: W) -> Vec<W> {
        self.distances
            .iter()
            .map(|d| d.unwrap_or(unreached))
            .collect()
    }

    /// Reconstructs the path from the source to `target` by following predecessors
    ///
    /// Returns `None` if `target` was not reached or the predecessor chain is broken.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                warn!("Cycle detected in path reconstruction at vertex {}", current);
                return None;
            }
            path.push(current);
            match self.predecessors.get(current).copied().flatten() {
                Some(pred) => current = pred,
                None => {
                    warn!("Vertex {} is reached but has no predecessor", current);
                    return None;
                }
            }
        }

        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

impl ShortestPathResult<i64> {
    /// Distances as a JSON array, `-1` for unreached vertices
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.distances_or(-1))?)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
