use std::env;
use std::time::{Duration, Instant};

use indexed_sssp::algorithm::{ShortestPathAlgorithm, bellman_ford::BellmanFord, dijkstra::Dijkstra};
use indexed_sssp::graph::{generate_random, DirectedGraph, Graph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<u64>, source: usize) -> (Duration, Vec<Option<u64>>)
where
    A: ShortestPathAlgorithm<u64, DirectedGraph<u64>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - {} failed: {}", name, e);
            return (start.elapsed(), Vec::new());
        }
    };
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    (duration, result.distances)
}

fn main() {
    env_logger::init();

    // Optional seed as the first argument
    let seed = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(42);

    // Bellman-Ford is O(VE); keep sizes where it still finishes
    let graph_sizes = vec![100, 1_000, 5_000, 10_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra (indexed heap) vs Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, 100, seed);
        let source = 0;

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (dijkstra_time, dijkstra_distances) = benchmark_algorithm("Dijkstra", &dijkstra, &graph, source);
        let (bf_time, bf_distances) = benchmark_algorithm("Bellman-Ford", &bellman_ford, &graph, source);

        if dijkstra_distances != bf_distances {
            eprintln!("Distance mismatch on graph with {} vertices!", size);
        }

        results.push((size, dijkstra_time, bf_time));
        println!(
            "Speedup - Dijkstra vs Bellman-Ford: {:.2}x",
            bf_time.as_secs_f64() / dijkstra_time.as_secs_f64()
        );
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Dijkstra (ms)", "B-Ford (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bf_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            bf_time.as_millis(),
            bf_time.as_secs_f64() / dijkstra_time.as_secs_f64()
        );
    }
}
