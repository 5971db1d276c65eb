use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::ReadableGraph;

/// Single-source shortest distances and the parent tree that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub start: usize,
    dist: Vec<Option<u64>>,
    parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// `None` when `vertex` is unreachable from the start (or out of range).
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.dist.get(vertex).copied().flatten()
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<u64>] {
        &self.dist
    }

    /// Route from the start to `vertex`, both ends included.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(p) = self.parent(current) {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `start` over non-negative weights.
///
/// Improved distances are pushed as new heap entries; older entries for the
/// same vertex are skipped when popped.
pub fn dijkstra<G: ReadableGraph>(graph: &G, start: usize) -> Result<ShortestPaths, GraphError> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if dist[u].is_some_and(|best| d > best) {
            trace!(vertex = u, stale = d, "skipping stale entry");
            continue;
        }

        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            let candidate = d + u64::from(neighbor.weight);
            if dist[v].map_or(true, |current| candidate < current) {
                trace!(from = u, to = v, distance = candidate, "relaxed");
                dist[v] = Some(candidate);
                parent[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    debug!(
        start,
        reachable = dist.iter().filter(|d| d.is_some()).count(),
        "dijkstra done"
    );
    Ok(ShortestPaths { start, dist, parent })
}
