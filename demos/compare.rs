use colored::*;
use indexed_sssp::graph::{Graph, MutableGraph};
use indexed_sssp::{BellmanFord, Dijkstra, DirectedGraph, IndexedHeap, IndexedMinHeap, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    println!("{}", "Indexed heap walk-through".bright_green());
    let mut heap: IndexedMinHeap<&str, i32> =
        IndexedHeap::from_entries(vec![("a", 5), ("b", 3), ("c", 8)]).unwrap();
    println!("peek            -> {:?}", heap.peek().unwrap());
    heap.update_key(&"c", 1).unwrap();
    println!("update c to 1   -> peek {:?}", heap.peek().unwrap());
    heap.remove_key(&"b").unwrap();
    while let Ok((key, value)) = heap.pop() {
        println!("pop             -> ({}, {})", key, value);
    }

    // Create a simple directed graph
    let mut graph = DirectedGraph::with_vertices(6);
    graph.add_edge(0, 1, 7u32);
    graph.add_edge(0, 2, 9);
    graph.add_edge(0, 5, 14);
    graph.add_edge(1, 2, 10);
    graph.add_edge(1, 3, 15);
    graph.add_edge(2, 3, 11);
    graph.add_edge(2, 5, 2);
    graph.add_edge(3, 4, 6);
    graph.add_edge(5, 4, 9);

    println!("\n{}", "Shortest paths from vertex 0".bright_yellow());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    let reference = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();

    for v in 0..graph.vertex_count() {
        match result.distance(v) {
            Some(dist) => {
                let status = if reference.distance(v) == Some(dist) { "ok".green() } else { "MISMATCH".red() };
                println!("Vertex {}: distance = {:>3}, path = {:?} [{}]", v, dist, result.path_to(v).unwrap_or_default(), status);
            }
            None => println!("Vertex {}: {}", v, "unreachable".dimmed()),
        }
    }
}
