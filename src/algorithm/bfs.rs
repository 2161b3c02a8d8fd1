use std::collections::VecDeque;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::store::GraphStore;
use crate::graph::traits::Graph;
use crate::graph::types::{Label, VertexId};
use crate::{Error, Result};

/// Queue-based breadth-first search over incident edges in both directions.
///
/// Computes the same hop distances the relaxation passes converge to and is
/// used to verify them.
#[derive(Debug, Default)]
pub struct BfsReference;

impl BfsReference {
    /// Creates a new BFS instance
    pub fn new() -> Self {
        BfsReference
    }
}

impl ShortestPathAlgorithm for BfsReference {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn compute_shortest_paths(&self, graph: &GraphStore, source: VertexId) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let mut distances = vec![Label::INFINITY; graph.vertex_count()];
        let mut queue = VecDeque::new();

        distances[source as usize] = Label::ZERO;
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let next = distances[u as usize].offer();
            for v in graph.incident_neighbors(u) {
                if next < distances[v as usize] {
                    distances[v as usize] = next;
                    queue.push_back(v);
                }
            }
        }

        Ok(ShortestPathResult { distances, source })
    }
}
