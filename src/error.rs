//! Error type shared by graph construction, dataset loading and reporting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex index outside `[0, vertex_count)`.
    #[error("invalid vertex {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
