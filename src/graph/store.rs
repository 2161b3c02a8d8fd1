use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::graph::traits::Graph;
use crate::graph::types::{EdgeDirection, Label, VertexId};
use crate::{Error, Result};

/// Storage for a single directed edge.
///
/// Both endpoints reach the same record. Readers see the `published` value,
/// which only changes at pass boundaries; writers lower the `working` value
/// during a pass.
#[derive(Debug)]
pub struct EdgeRecord {
    source: VertexId,
    target: VertexId,
    published: AtomicU32,
    working: AtomicU32,
}

impl EdgeRecord {
    fn new(source: VertexId, target: VertexId) -> Self {
        EdgeRecord {
            source,
            target,
            published: AtomicU32::new(Label::INFINITY.0),
            working: AtomicU32::new(Label::INFINITY.0),
        }
    }

    /// Vertex the edge starts at
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Vertex the edge ends at
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Value visible to readers during the current pass
    pub fn label(&self) -> Label {
        Label(self.published.load(Ordering::Relaxed))
    }
}

/// One entry of a vertex's incident edge list
#[derive(Debug, Clone, Copy)]
struct Incidence {
    edge: usize,
    neighbor: VertexId,
    direction: EdgeDirection,
}

/// Vertex and edge storage for the relaxation passes.
///
/// Incident edges are kept in a compressed layout: for each vertex its
/// in-edges come first, followed by its out-edges. A self-loop is listed once
/// in each direction.
#[derive(Debug)]
pub struct GraphStore {
    vertex_labels: Vec<AtomicU32>,
    edges: Vec<EdgeRecord>,
    offsets: Vec<usize>,
    out_offsets: Vec<usize>,
    incidences: Vec<Incidence>,
}

impl GraphStore {
    /// Builds a store with `vertex_count` vertices and the given directed edges.
    /// Every vertex and edge label starts at infinity.
    pub fn from_edges(vertex_count: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        if vertex_count > Label::INFINITY.0 as usize {
            return Err(Error::AlgorithmError(format!(
                "{} vertices do not fit the 32-bit vertex id space",
                vertex_count
            )));
        }

        let mut in_degree = vec![0usize; vertex_count];
        let mut out_degree = vec![0usize; vertex_count];
        for &(from, to) in edges {
            if from as usize >= vertex_count || to as usize >= vertex_count {
                return Err(Error::InvalidEdge(from, to));
            }
            out_degree[from as usize] += 1;
            in_degree[to as usize] += 1;
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut out_offsets = Vec::with_capacity(vertex_count);
        let mut total = 0;
        for v in 0..vertex_count {
            offsets.push(total);
            out_offsets.push(total + in_degree[v]);
            total += in_degree[v] + out_degree[v];
        }
        offsets.push(total);

        // Fill cursors: in-edges grow from offsets[v], out-edges from out_offsets[v]
        let mut in_cursor: Vec<usize> = offsets[..vertex_count].to_vec();
        let mut out_cursor = out_offsets.clone();
        let placeholder = Incidence {
            edge: 0,
            neighbor: 0,
            direction: EdgeDirection::In,
        };
        let mut incidences = vec![placeholder; total];
        let mut records = Vec::with_capacity(edges.len());

        for (index, &(from, to)) in edges.iter().enumerate() {
            records.push(EdgeRecord::new(from, to));

            let slot = &mut out_cursor[from as usize];
            incidences[*slot] = Incidence {
                edge: index,
                neighbor: to,
                direction: EdgeDirection::Out,
            };
            *slot += 1;

            let slot = &mut in_cursor[to as usize];
            incidences[*slot] = Incidence {
                edge: index,
                neighbor: from,
                direction: EdgeDirection::In,
            };
            *slot += 1;
        }

        let vertex_labels = (0..vertex_count)
            .map(|_| AtomicU32::new(Label::INFINITY.0))
            .collect();

        Ok(GraphStore {
            vertex_labels,
            edges: records,
            offsets,
            out_offsets,
            incidences,
        })
    }

    /// Returns a view of one vertex and its incident edges.
    ///
    /// Panics if `id` is not a vertex of this store.
    pub fn vertex(&self, id: VertexId) -> VertexView<'_> {
        let v = id as usize;
        let start = self.offsets[v];
        VertexView {
            id,
            label: &self.vertex_labels[v],
            store: self,
            edges: &self.incidences[start..self.offsets[v + 1]],
            out_from: self.out_offsets[v] - start,
        }
    }

    /// Like [`vertex`](Self::vertex) but reports unknown IDs as an error
    pub fn try_vertex(&self, id: VertexId) -> Result<VertexView<'_>> {
        if (id as usize) < self.vertex_labels.len() {
            Ok(self.vertex(id))
        } else {
            Err(Error::InvalidVertex(id))
        }
    }

    /// Current label of a vertex
    pub fn label(&self, id: VertexId) -> Option<Label> {
        self.vertex_labels
            .get(id as usize)
            .map(|label| Label(label.load(Ordering::Relaxed)))
    }

    /// Snapshot of every vertex label, indexed by vertex ID
    pub fn labels(&self) -> Vec<Label> {
        self.vertex_labels
            .iter()
            .map(|label| Label(label.load(Ordering::Relaxed)))
            .collect()
    }

    /// Every edge record, in insertion order
    pub fn edge_records(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Makes the values written during the pass visible to readers.
    /// Returns how many edges changed their published value.
    pub fn publish_edges(&self) -> usize {
        self.edges
            .par_iter()
            .filter(|record| {
                let working = record.working.load(Ordering::Relaxed);
                record.published.swap(working, Ordering::Relaxed) != working
            })
            .count()
    }

    /// Puts every vertex and edge label back to infinity
    pub fn reset_labels(&self) {
        for label in &self.vertex_labels {
            label.store(Label::INFINITY.0, Ordering::Relaxed);
        }
        for record in &self.edges {
            record.published.store(Label::INFINITY.0, Ordering::Relaxed);
            record.working.store(Label::INFINITY.0, Ordering::Relaxed);
        }
    }

    fn neighbors<'a>(&self, edges: &'a [Incidence]) -> Box<dyn Iterator<Item = VertexId> + 'a> {
        Box::new(edges.iter().map(|inc| inc.neighbor))
    }
}

impl Graph for GraphStore {
    fn vertex_count(&self) -> usize {
        self.vertex_labels.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        let v = vertex as usize;
        let edges = &self.incidences[self.out_offsets[v]..self.offsets[v + 1]];
        self.neighbors(edges)
    }

    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        let v = vertex as usize;
        let edges = &self.incidences[self.offsets[v]..self.out_offsets[v]];
        self.neighbors(edges)
    }
}

/// A vertex together with its incident edges, handed to the vertex update.
#[derive(Debug, Clone, Copy)]
pub struct VertexView<'a> {
    id: VertexId,
    label: &'a AtomicU32,
    store: &'a GraphStore,
    edges: &'a [Incidence],
    out_from: usize,
}

impl<'a> VertexView<'a> {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> Label {
        Label(self.label.load(Ordering::Relaxed))
    }

    pub fn set_label(&self, label: Label) {
        self.label.store(label.0, Ordering::Relaxed);
    }

    /// Number of incident edges, in and out
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The `i`-th incident edge. In-edges come before out-edges.
    pub fn edge(&self, i: usize) -> EdgeView<'a> {
        self.view(self.edges[i])
    }

    /// Iterates over every incident edge
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        let this = *self;
        self.edges.iter().map(move |inc| this.view(*inc))
    }

    pub fn num_outedges(&self) -> usize {
        self.edges.len() - self.out_from
    }

    /// The `i`-th outgoing edge
    pub fn outedge(&self, i: usize) -> EdgeView<'a> {
        self.view(self.edges[self.out_from + i])
    }

    /// Iterates over the outgoing edges only
    pub fn outedges(&self) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        let this = *self;
        self.edges[self.out_from..].iter().map(move |inc| this.view(*inc))
    }

    fn view(&self, inc: Incidence) -> EdgeView<'a> {
        EdgeView {
            record: &self.store.edges[inc.edge],
            neighbor: inc.neighbor,
            direction: inc.direction,
        }
    }
}

/// One incident edge as seen from the vertex being updated
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    record: &'a EdgeRecord,
    neighbor: VertexId,
    direction: EdgeDirection,
}

impl<'a> EdgeView<'a> {
    /// Vertex at the far end of the edge
    pub fn neighbor(&self) -> VertexId {
        self.neighbor
    }

    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    pub fn is_out(&self) -> bool {
        self.direction == EdgeDirection::Out
    }

    /// Label published at the start of the pass
    pub fn label(&self) -> Label {
        self.record.label()
    }

    /// Label including writes made so far in this pass
    pub fn pending(&self) -> Label {
        Label(self.record.working.load(Ordering::Relaxed))
    }

    /// Overwrites the pending label without comparison
    pub fn set_label(&self, label: Label) {
        self.record.working.store(label.0, Ordering::Relaxed);
    }

    /// Lowers the pending label to `label` if that is an improvement.
    /// Concurrent writers merge by minimum. Returns true if this call lowered it.
    pub fn lower_to(&self, label: Label) -> bool {
        self.record.working.fetch_min(label.0, Ordering::Relaxed) > label.0
    }
}
