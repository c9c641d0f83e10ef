use log::debug;
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::Result;

/// Runs `algorithm` from every vertex in `sources` in parallel
///
/// Each run owns its own queue; only the graph is shared. Results come back
/// in the order of `sources`. The first error aborts the batch.
pub fn distances_from_sources<A, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<ShortestPathResult<W>>>
where
    A: ShortestPathAlgorithm<W, G> + Sync,
    W: Weight + Send,
    G: Graph<W> + Sync,
{
    debug!(
        "{} from {} sources over {} vertices",
        algorithm.name(),
        sources.len(),
        graph.vertex_count()
    );
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// Distance matrix from every vertex to every vertex; `matrix[s][t]` is `None` if unreachable
pub fn all_pairs<A, W, G>(algorithm: &A, graph: &G) -> Result<Vec<Vec<Option<W>>>>
where
    A: ShortestPathAlgorithm<W, G> + Sync,
    W: Weight + Send,
    G: Graph<W> + Sync,
{
    let sources: Vec<usize> = (0..graph.vertex_count()).collect();
    let results = distances_from_sources(algorithm, graph, &sources)?;
    Ok(results.into_iter().map(|r| r.distances).collect())
}
