use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm over an indexed min-heap
///
/// The queue holds one entry per discovered, not yet finalized vertex, keyed
/// by vertex id and valued by tentative distance. Improving a tentative
/// distance updates that entry in place instead of pushing a duplicate, so
/// every vertex is popped, and finalized, at most once.
///
/// Edge weights must be non-negative. This is not checked: on graphs with
/// negative weights the output is unspecified.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Stop as soon as this vertex is finalized
    target: Option<usize>,
    /// Whether to record the shortest path tree
    track_predecessors: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            target: None,
            track_predecessors: true,
        }
    }

    /// Stop once `target` is finalized; vertices not yet finalized then stay unreached
    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    /// Enable or disable recording predecessors
    pub fn with_predecessors(mut self, enabled: bool) -> Self {
        self.track_predecessors = enabled;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        debug!("Dijkstra from vertex {} over {} vertices", source, n);

        // `distances[v]` is set exactly once, when `v` is popped
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        let mut queue: IndexedMinHeap<usize, W> = IndexedMinHeap::new();
        queue.add(source, W::zero())?;

        while !queue.is_empty() {
            let (u, dist_u) = queue.pop()?;
            distances[u] = Some(dist_u);

            if self.target == Some(u) {
                break;
            }

            // Relax all outgoing edges to vertices not yet finalized
            for (v, weight) in graph.outgoing_edges(u) {
                if v >= n {
                    return Err(Error::InvalidEdge(u, v));
                }
                if distances[v].is_some() {
                    continue;
                }

                let candidate = dist_u
                    .checked_add(weight)
                    .ok_or(Error::DistanceOverflow { from: u, to: v })?;
                if !queue.contains_key(&v) {
                    trace!("discovered {} at {:?} via {}", v, candidate, u);
                    queue.add(v, candidate)?;
                } else if *queue.value_of_key(&v)? > candidate {
                    trace!("improved {} to {:?} via {}", v, candidate, u);
                    queue.update_key(&v, candidate)?;
                } else {
                    continue;
                }

                if self.track_predecessors {
                    predecessors[v] = Some(u);
                }
            }
        }

        // An early stop can leave tentative predecessors on unreached vertices
        for (pred, dist) in predecessors.iter_mut().zip(&distances) {
            if dist.is_none() {
                *pred = None;
            }
        }

        let reached = distances.iter().filter(|d| d.is_some()).count();
        debug!("Dijkstra from vertex {} reached {} of {} vertices", source, reached, n);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
