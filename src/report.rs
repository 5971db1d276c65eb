//! Plain-text rendering of graph and algorithm results.
//!
//! Writers take any `io::Write` so the same text can go to stdout or a buffer.

use std::io::{self, Write};

use crate::graph::WeightedGraph;
use crate::shortest_path::ShortestPaths;
use crate::spanning_tree::SpanningTree;
use crate::traversal::{Traversal, TraversalEvent};

pub fn write_adjacency<W: Write>(out: &mut W, graph: &WeightedGraph) -> io::Result<()> {
    writeln!(out, "Transportation Network Topology:")?;
    writeln!(out, "=================================")?;
    for (city, neighbors) in graph.adjacency() {
        writeln!(out, "City {} connects to:", city)?;
        for n in neighbors {
            writeln!(out, "  -> City {} (Travel time: {} hours)", n.vertex, n.weight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_depth_first<W: Write>(out: &mut W, dfs: &Traversal) -> io::Result<()> {
    writeln!(out, "Network Trace (DFS) from City {}:", dfs.start)?;
    writeln!(out, "Purpose: Tracing possible delivery routes")?;
    writeln!(out, "======================================")?;
    for event in &dfs.events {
        match event {
            TraversalEvent::Visit(city) => writeln!(out, "Inspecting City {}", city)?,
            TraversalEvent::Discover { to, weight, .. } => writeln!(
                out,
                "  -> Potential delivery route to City {} (Travel time: {} hours)",
                to, weight
            )?,
        }
    }
    writeln!(out)
}

pub fn write_breadth_first<W: Write>(out: &mut W, bfs: &Traversal) -> io::Result<()> {
    writeln!(out, "Layer-by-Layer Network Inspection (BFS) from City {}:", bfs.start)?;
    writeln!(out, "Purpose: Analyzing delivery routes by distance from source")?;
    writeln!(out, "=================================================")?;
    for event in &bfs.events {
        match event {
            TraversalEvent::Visit(city) => writeln!(out, "Checking City {}", city)?,
            TraversalEvent::Discover { to, weight, .. } => writeln!(
                out,
                "  -> Next delivery route to City {} (Travel time: {} hours)",
                to, weight
            )?,
        }
    }
    writeln!(out)
}

pub fn write_shortest_paths<W: Write>(out: &mut W, paths: &ShortestPaths) -> io::Result<()> {
    let start = paths.start;
    writeln!(out, "Shortest path from City {}:", start)?;
    for (city, dist) in paths.distances().iter().enumerate() {
        match dist {
            None => writeln!(out, "{} -> {} : Unreachable", start, city)?,
            Some(hours) => {
                let route = paths
                    .path_to(city)
                    .unwrap_or_default()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                writeln!(out, "{} -> {} : {} hours (via {})", start, city, hours, route)?;
            }
        }
    }
    writeln!(out)
}

pub fn write_spanning_tree<W: Write>(out: &mut W, tree: &SpanningTree) -> io::Result<()> {
    writeln!(out, "Minimum Spanning Tree (MST):")?;
    writeln!(out, "===============================")?;
    for (parent, child, weight) in tree.edges() {
        writeln!(out, "City {} -> City {} (Weight: {} hours)", parent, child, weight)?;
    }
    writeln!(out, "Total Weight of MST: {} hours", tree.total_weight())
}
