use indexed_sssp::{DirectedGraph, Dijkstra, ShortestPathAlgorithm};
use log::info;
use std::env;
use std::fs;
use std::process;

const USAGE: &str = "usage: sssp <graph.json> [source]

graph.json holds an adjacency list of non-negative integer weights,
e.g. [[[1, 1], [2, 3]], [[2, 1]], []]. Prints the distance from the
source (default 0) to every vertex, -1 for unreachable vertices.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    let path = &args[1];
    let source = match args.get(2) {
        Some(raw) => raw.parse::<usize>()?,
        None => 0,
    };

    let text = fs::read_to_string(path).map_err(indexed_sssp::Error::from)?;
    let graph = DirectedGraph::from_json(&text)?;
    info!("Loaded graph with {} vertices from {}", graph.adjacency().len(), path);

    let result = Dijkstra::new().compute_shortest_paths(&graph, source)?;
    println!("{}", result.to_json()?);

    Ok(())
}
