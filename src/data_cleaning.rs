use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::GraphError;

/// A road between two cities, weighted by travel time in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
    pub weight: u32,
}

impl Edge {
    pub fn new(src: usize, dest: usize, weight: u32) -> Self {
        Edge { src, dest, weight }
    }

    pub fn is_loop(&self) -> bool {
        self.src == self.dest
    }
}

/// A named edge list bundled with the binary.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub name: &'static str,
    pub vertex_count: usize,
    pub csv: &'static str,
}

impl Dataset {
    pub fn edges(&self) -> Result<Vec<Edge>, GraphError> {
        read_edges(self.csv.as_bytes())
    }
}

pub const DATASETS: &[Dataset] = &[
    Dataset {
        name: "transport_network",
        vertex_count: 8,
        csv: include_str!("../data/transport_network.csv"),
    },
    Dataset {
        name: "core_routes",
        vertex_count: 8,
        csv: include_str!("../data/core_routes.csv"),
    },
];

/// Parses `src,dest,weight` rows (the header line is skipped).
/// Row order is kept, duplicates and self-loops included.
pub fn read_edges<R: Read>(reader: R) -> Result<Vec<Edge>, GraphError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All) // tolerates "0, 1, 12"
        .from_reader(reader);

    let edges = rdr
        .deserialize()
        .collect::<Result<Vec<Edge>, csv::Error>>()?;
    debug!(edges = edges.len(), "parsed edge list");
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_edges() {
        let data = "src,dest,weight\n0, 1, 12\n3,3,3\n";
        let edges = read_edges(data.as_bytes()).unwrap();
        assert_eq!(edges, vec![Edge::new(0, 1, 12), Edge::new(3, 3, 3)]);
        assert!(edges[1].is_loop());
    }

    #[test]
    fn test_read_edges_empty() {
        let edges = read_edges("src,dest,weight\n".as_bytes()).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_read_edges_rejects_negative_weight() {
        let result = read_edges("src,dest,weight\n0,1,-4\n".as_bytes());
        assert!(matches!(result, Err(GraphError::Csv(_))));
    }

    #[test]
    fn test_bundled_datasets() {
        let full = DATASETS[0].edges().unwrap();
        assert_eq!(full.len(), 14);
        assert_eq!(full.iter().filter(|e| e.is_loop()).count(), 3);
        // (1,2,3) is listed twice
        assert_eq!(full.iter().filter(|e| **e == Edge::new(1, 2, 3)).count(), 2);

        let core = DATASETS[1].edges().unwrap();
        assert_eq!(core.len(), 10);
        assert!(core.iter().all(|e| e.src < 8 && e.dest < 8));
    }
}
