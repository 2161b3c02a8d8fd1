use std::fmt::Debug;

use crate::graph::types::VertexId;

/// Trait representing an unweighted directed graph with dense vertex IDs
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the targets of the outgoing edges of a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the sources of the incoming edges of a vertex
    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        (vertex as usize) < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from).any(|target| target == to)
    }

    /// Returns an iterator over every neighbour reachable through an incident
    /// edge, in either direction. Parallel edges yield the neighbour repeatedly.
    fn incident_neighbors(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.incoming_edges(vertex).chain(self.outgoing_edges(vertex)))
    }
}
