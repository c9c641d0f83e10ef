pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::DirectedGraph;
pub use generators::{generate_grid, generate_random, generate_random_real};
