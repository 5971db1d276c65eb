use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::ReadableGraph;

const ROOT: usize = 0;

/// Tree grown by Prim's algorithm from vertex 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    key: Vec<Option<u32>>,
    parent: Vec<Option<usize>>,
}

impl SpanningTree {
    pub fn root(&self) -> usize {
        ROOT
    }

    /// Weight of the edge that joined `vertex` to the tree.
    pub fn key(&self, vertex: usize) -> Option<u32> {
        self.key.get(vertex).copied().flatten()
    }

    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// `(parent, child, weight)` for each tree vertex but the root, by child index.
    pub fn edges(&self) -> Vec<(usize, usize, u32)> {
        (0..self.parent.len())
            .filter_map(|v| Some((self.parent(v)?, v, self.key(v)?)))
            .collect()
    }

    pub fn total_weight(&self) -> u64 {
        self.edges().iter().map(|(_, _, w)| u64::from(*w)).sum()
    }
}

/// Prim's minimum spanning tree rooted at vertex 0.
///
/// A vertex's key is the cheapest single edge into the tree found so far,
/// not a path length. Vertices unreachable from the root keep no parent.
pub fn prim<G: ReadableGraph>(graph: &G) -> Result<SpanningTree, GraphError> {
    graph.check_vertex(ROOT)?;

    let n = graph.vertex_count();
    let mut key: Vec<Option<u32>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut heap = BinaryHeap::new();

    key[ROOT] = Some(0);
    heap.push(Reverse((0u32, ROOT)));

    while let Some(Reverse((_, u))) = heap.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            if !in_tree[v] && key[v].map_or(true, |k| neighbor.weight < k) {
                trace!(from = u, to = v, weight = neighbor.weight, "key lowered");
                key[v] = Some(neighbor.weight);
                parent[v] = Some(u);
                heap.push(Reverse((neighbor.weight, v)));
            }
        }
    }

    let tree = SpanningTree { key, parent };
    debug!(edges = tree.edges().len(), total = tree.total_weight(), "prim done");
    Ok(tree)
}
