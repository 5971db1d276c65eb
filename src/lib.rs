//! Shortest paths, traversals and spanning trees over a small weighted road network.

pub mod data_cleaning;
pub mod error;
pub mod graph;
pub mod logging;
pub mod report;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use data_cleaning::{Dataset, Edge, DATASETS};
pub use error::GraphError;
pub use graph::{Neighbor, ReadableGraph, WeightedGraph};
