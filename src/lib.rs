//! Vertex SSSP - vertex-centric single-source shortest paths
//!
//! This library computes hop distances from a source vertex with an iterative
//! relaxation program in the style of out-of-core graph engines: every pass
//! sweeps the vertices in bounded windows, each vertex reads the labels of its
//! incident edges, keeps the smallest, and offers one more hop to its
//! neighbours through the same edges. Passes stop when no edge label changes
//! or when the pass budget runs out.
//!
//! An optional scheduler restricts each pass to the vertices that received an
//! improved edge label in the previous one.

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod metrics;

use std::path::{Path, PathBuf};

pub use algorithm::{
    bfs::BfsReference,
    driver::{DriverConfig, PassDriver, PassReport, RunSummary},
    program::{PassSignal, RelaxationProgram},
    vertex_sssp::VertexCentricSssp,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{GraphStore, Label, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(VertexId),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(VertexId, VertexId),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(VertexId),

    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
