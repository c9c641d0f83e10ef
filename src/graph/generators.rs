use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices and about `edge_factor * n` edges
///
/// Weights are integers in `0..=max_weight`. Self-loops are skipped and a
/// repeated `(u, v)` pair overwrites the earlier weight. The same seed always
/// yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight));
        }
    }

    graph
}

/// Same as [`generate_random`] with real weights in `[0, max_weight)`
pub fn generate_random_real(
    n: usize,
    edge_factor: f64,
    max_weight: f64,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 || max_weight <= 0.0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, OrderedFloat(rng.gen_range(0.0..max_weight)));
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity in both directions
///
/// Vertex `(x, y)` has id `y * width + x`; every edge has weight `weight`.
pub fn generate_grid(width: usize, height: usize, weight: u64) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_vertices(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_edge(current, index(x - 1, y), weight);
            }
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), weight);
            }
            if y > 0 {
                graph.add_edge(current, index(x, y - 1), weight);
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), weight);
            }
        }
    }

    graph
}
