use tracing::debug;

use crate::data_cleaning::Edge;
use crate::error::GraphError;

/// One entry of an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: u32,
}

/// Read-only view the algorithms run against.
pub trait ReadableGraph {
    fn vertex_count(&self) -> usize;

    /// Neighbors of `vertex` in insertion order. Empty for an out-of-range index.
    fn neighbors(&self, vertex: usize) -> &[Neighbor];

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

/// Undirected weighted graph over vertices `0..vertex_count`.
///
/// Built once from an edge list; there is no way to add or remove edges afterwards.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<Neighbor>>,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn new(vertex_count: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        // validate everything first so a bad edge leaves nothing half-built
        for edge in edges {
            for vertex in [edge.src, edge.dest] {
                if vertex >= vertex_count {
                    return Err(GraphError::InvalidVertex { vertex, vertex_count });
                }
            }
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        for edge in edges {
            adjacency[edge.src].push(Neighbor { vertex: edge.dest, weight: edge.weight });
            adjacency[edge.dest].push(Neighbor { vertex: edge.src, weight: edge.weight });
        }

        debug!(vertices = vertex_count, edges = edges.len(), "built graph");
        Ok(WeightedGraph { adjacency, edge_count: edges.len() })
    }

    /// Number of inserted edges, duplicates and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Every vertex with its neighbor list, in index order.
    pub fn adjacency(&self) -> impl Iterator<Item = (usize, &[Neighbor])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, neighbors)| (vertex, neighbors.as_slice()))
    }
}

impl ReadableGraph for WeightedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: usize) -> &[Neighbor] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
