use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford relaxation, O(|V| * |E|)
///
/// Slow but simple; serves as the reference distances other algorithms are
/// checked against.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Stop after the first pass that changes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with early exit enabled
    pub fn new() -> Self {
        BellmanFord { early_exit: true }
    }

    /// Enable or disable stopping once a full pass relaxes no edge
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            let mut changed = false;

            for u in 0..n {
                let dist_u = match distances[u] {
                    Some(d) => d,
                    None => continue,
                };
                for (v, weight) in graph.outgoing_edges(u) {
                    if v >= n {
                        return Err(Error::InvalidEdge(u, v));
                    }
                    let candidate = dist_u
                        .checked_add(weight)
                        .ok_or(Error::DistanceOverflow { from: u, to: v })?;
                    if distances[v].map_or(true, |current| candidate < current) {
                        distances[v] = Some(candidate);
                        predecessors[v] = Some(u);
                        changed = true;
                    }
                }
            }

            if !changed && self.early_exit {
                break;
            }
        }

        debug!("Bellman-Ford from vertex {} settled after {} passes", source, passes);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
