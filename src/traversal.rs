use std::collections::VecDeque;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::ReadableGraph;

/// One step of a traversal, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    Visit(usize),
    /// Edge followed to reach a vertex that had not been seen yet.
    Discover { from: usize, to: usize, weight: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub start: usize,
    pub events: Vec<TraversalEvent>,
}

impl Traversal {
    /// Visited vertices in visit order.
    pub fn order(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraversalEvent::Visit(v) => Some(*v),
                TraversalEvent::Discover { .. } => None,
            })
            .collect()
    }
}

/// Depth-first traversal from `start`.
///
/// Each stack frame holds a vertex and the index of the next neighbor to
/// look at, which reproduces the recursive visit order exactly.
pub fn depth_first<G: ReadableGraph>(graph: &G, start: usize) -> Result<Traversal, GraphError> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut events = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited[start] = true;
    events.push(TraversalEvent::Visit(start));
    stack.push((start, 0));

    while let Some((vertex, cursor)) = stack.last_mut() {
        let vertex = *vertex;
        let Some(next) = graph.neighbors(vertex).get(*cursor).copied() else {
            stack.pop(); // all neighbors handled
            continue;
        };
        *cursor += 1;

        if !visited[next.vertex] {
            visited[next.vertex] = true;
            events.push(TraversalEvent::Discover {
                from: vertex,
                to: next.vertex,
                weight: next.weight,
            });
            events.push(TraversalEvent::Visit(next.vertex));
            stack.push((next.vertex, 0));
        }
    }

    debug!(start, visited = visited.iter().filter(|v| **v).count(), "dfs done");
    Ok(Traversal { start, events })
}

/// Breadth-first traversal from `start`. Vertices are marked when enqueued.
pub fn breadth_first<G: ReadableGraph>(graph: &G, start: usize) -> Result<Traversal, GraphError> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut events = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        events.push(TraversalEvent::Visit(vertex));
        for neighbor in graph.neighbors(vertex) {
            if !visited[neighbor.vertex] {
                visited[neighbor.vertex] = true;
                events.push(TraversalEvent::Discover {
                    from: vertex,
                    to: neighbor.vertex,
                    weight: neighbor.weight,
                });
                queue.push_back(neighbor.vertex);
            }
        }
    }

    debug!(start, visited = visited.iter().filter(|v| **v).count(), "bfs done");
    Ok(Traversal { start, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_cleaning::{Edge, DATASETS};
    use crate::graph::WeightedGraph;
    use std::collections::HashSet;

    fn transport_graph() -> WeightedGraph {
        let data = &DATASETS[0];
        WeightedGraph::new(data.vertex_count, &data.edges().unwrap()).unwrap()
    }

    #[test]
    fn test_depth_first_order() {
        let graph = transport_graph();
        let dfs = depth_first(&graph, 0).unwrap();
        // 0 -> 1 -> 2 -> 3, back to 2 -> 6 -> 5 -> 4 -> 7
        assert_eq!(dfs.order(), vec![0, 1, 2, 3, 6, 5, 4, 7]);
        assert_eq!(dfs.events[1], TraversalEvent::Discover { from: 0, to: 1, weight: 12 });
    }

    #[test]
    fn test_breadth_first_order() {
        let graph = transport_graph();
        let bfs = breadth_first(&graph, 0).unwrap();
        assert_eq!(bfs.order(), vec![0, 1, 3, 2, 6, 5, 4, 7]);
    }

    #[test]
    fn test_same_visited_set() {
        let graph = transport_graph();
        for start in 0..graph.vertex_count() {
            let dfs = depth_first(&graph, start).unwrap().order();
            let bfs = breadth_first(&graph, start).unwrap().order();

            let dfs_set: HashSet<usize> = dfs.iter().copied().collect();
            let bfs_set: HashSet<usize> = bfs.iter().copied().collect();
            assert_eq!(dfs_set.len(), dfs.len()); // no vertex twice
            assert_eq!(dfs_set, bfs_set);
            assert_eq!(dfs[0], start);
        }
    }

    #[test]
    fn test_unreachable_vertices_skipped() {
        let edges = vec![Edge::new(0, 1, 2), Edge::new(2, 3, 4)];
        let graph = WeightedGraph::new(5, &edges).unwrap();

        assert_eq!(depth_first(&graph, 0).unwrap().order(), vec![0, 1]);
        assert_eq!(breadth_first(&graph, 3).unwrap().order(), vec![3, 2]);
        assert_eq!(breadth_first(&graph, 4).unwrap().order(), vec![4]);
    }

    #[test]
    fn test_invalid_start() {
        let graph = transport_graph();
        assert!(matches!(
            depth_first(&graph, 8),
            Err(GraphError::InvalidVertex { vertex: 8, .. })
        ));
        assert!(breadth_first(&graph, 42).is_err());
    }
}
