use std::fmt::Debug;
use num_traits::{CheckedAdd, Float, Zero};
use ordered_float::OrderedFloat;

/// Edge weight / path distance
///
/// Weights are totally ordered and summable: integers, or `OrderedFloat`
/// for real-valued weights.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two distances, or `None` if it does not fit in `Self`
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Floats saturate to infinity, which still orders after every finite distance
impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
}

/// Trait representing a weighted directed graph over vertices `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight
    ///
    /// Returns false if either endpoint is missing or the weight is negative.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool;
}
