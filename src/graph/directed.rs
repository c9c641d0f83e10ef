use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Vertices are the contiguous ids `0..vertex_count()`. Each vertex keeps its
/// out-edges in insertion order. Weights are never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from an adjacency list: `adjacency[v]` holds the out-edges of `v`
    ///
    /// Edge order and parallel edges are kept as given. Fails if an edge
    /// points outside `0..adjacency.len()` or carries a negative weight.
    pub fn from_adjacency(adjacency: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let n = adjacency.len();
        for (from, edges) in adjacency.iter().enumerate() {
            for &(to, weight) in edges {
                if to >= n {
                    return Err(Error::InvalidEdge(from, to));
                }
                if weight < W::zero() {
                    return Err(Error::NegativeWeight { from, to });
                }
            }
        }
        Ok(DirectedGraph {
            outgoing_edges: adjacency,
        })
    }

    /// The adjacency list backing this graph
    pub fn adjacency(&self) -> &[Vec<(usize, W)>] {
        &self.outgoing_edges
    }

    /// Out-edges of `vertex` as a slice
    pub fn edges_of(&self, vertex: usize) -> Result<&[(usize, W)]> {
        self.outgoing_edges
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex(vertex))
    }
}

impl DirectedGraph<i64> {
    /// Parses a JSON adjacency list such as `[[[1, 1], [2, 3]], [[2, 1]], []]`
    ///
    /// Each inner pair is `[target, weight]`. The parsed list goes through
    /// [`DirectedGraph::from_adjacency`], so the same validation applies.
    pub fn from_json(text: &str) -> Result<Self> {
        let adjacency: Vec<Vec<(usize, i64)>> = serde_json::from_str(text)?;
        Self::from_adjacency(adjacency)
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }

        let outgoing = &mut self.outgoing_edges[from];
        // Check if edge already exists and update it if it does
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            outgoing.push((to, weight));
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }
        match self
            .outgoing_edges
            .get_mut(from)
            .and_then(|edges| edges.iter_mut().find(|(target, _)| *target == to))
        {
            Some(edge) => {
                edge.1 = weight;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn add_edge_rejects_bad_input() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::with_vertices(2);
        assert!(!graph.add_edge(0, 2, 1));
        assert!(!graph.add_edge(0, 1, -1));
        assert!(graph.add_edge(0, 1, 4));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_twice_updates_weight() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::with_vertices(2);
        graph.add_edge(0, 1, 4);
        graph.add_edge(0, 1, 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge_weight(0, 1), Some(2));
    }

    #[test]
    fn from_adjacency_keeps_order_and_parallel_edges() {
        let graph = DirectedGraph::from_adjacency(vec![vec![(1, 5u32), (1, 3), (0, 0)], vec![]]).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.outgoing_edges(0).collect::<Vec<_>>(), vec![(1, 5), (1, 3), (0, 0)]);
    }

    #[test]
    fn from_adjacency_validates() {
        let dangling = DirectedGraph::from_adjacency(vec![vec![(3, 1i32)]]);
        assert!(matches!(dangling, Err(Error::InvalidEdge(0, 3))));

        let negative = DirectedGraph::from_adjacency(vec![vec![], vec![(0, OrderedFloat(-0.5))]]);
        assert!(matches!(negative, Err(Error::NegativeWeight { from: 1, to: 0 })));
    }

    #[test]
    fn from_json_parses_adjacency() {
        let graph = DirectedGraph::from_json("[[[1, 1], [2, 3]], [[2, 1]], []]").unwrap();
        assert_eq!(graph.adjacency(), &[vec![(1, 1), (2, 3)], vec![(2, 1)], vec![]]);
    }

    #[test]
    fn from_json_rejects_bad_input() {
        assert!(matches!(DirectedGraph::from_json("[[[1, 1]"), Err(Error::Parse(_))));
        assert!(matches!(DirectedGraph::from_json("[[[1, \"x\"]], []]"), Err(Error::Parse(_))));
        assert!(matches!(DirectedGraph::from_json("[[[2, 1]], []]"), Err(Error::InvalidEdge(0, 2))));
        assert!(matches!(
            DirectedGraph::from_json("[[], [[0, -4]]]"),
            Err(Error::NegativeWeight { from: 1, to: 0 })
        ));
    }

    #[test]
    fn remove_and_update_edges() {
        let mut graph: DirectedGraph<u8> = DirectedGraph::with_vertices(3);
        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 2, 1);

        assert!(graph.update_edge_weight(0, 2, 9));
        assert!(!graph.update_edge_weight(1, 2, 9));
        assert!(graph.remove_edge(0, 1));
        assert!(!graph.remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.edges_of(0).unwrap(), &[(2, 9)]);
        assert!(matches!(graph.edges_of(5), Err(Error::InvalidVertex(5))));
    }
}
