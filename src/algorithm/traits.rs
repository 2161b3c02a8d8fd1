use serde::{Deserialize, Serialize};

use crate::graph::store::GraphStore;
use crate::graph::types::{Label, VertexId};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    /// Hop distance from the source to each vertex, `Label::INFINITY` if unreachable
    pub distances: Vec<Label>,

    /// Source vertex ID
    pub source: VertexId,
}

impl ShortestPathResult {
    /// Distance to `vertex`, or `None` for IDs outside the graph
    pub fn distance(&self, vertex: VertexId) -> Option<Label> {
        self.distances.get(vertex as usize).copied()
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &GraphStore, source: VertexId) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
