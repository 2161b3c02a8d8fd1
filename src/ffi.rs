use libc::{c_int, size_t};

use crate::algorithm::vertex_sssp::VertexCentricSssp;
use crate::graph::store::GraphStore;
use crate::metrics::Metrics;

#[repr(C)]
pub struct FfiGraph {
    store: GraphStore,
}

/// Builds a graph from `edge_count` (source, target) pairs laid out flat in
/// `edges`. Returns null if an endpoint is outside `0..vertex_count` or if
/// `edge_count` pairs cannot be addressed.
#[no_mangle]
pub extern "C" fn vsssp_graph_new(
    vertex_count: size_t,
    edges: *const u32,
    edge_count: size_t,
) -> *mut FfiGraph {
    let pairs: Vec<(u32, u32)> = if edges.is_null() || edge_count == 0 {
        Vec::new()
    } else {
        let len = match edge_count.checked_mul(2) {
            Some(len) if len <= isize::MAX as usize / std::mem::size_of::<u32>() => len,
            _ => return std::ptr::null_mut(),
        };
        let flat = unsafe { std::slice::from_raw_parts(edges, len) };
        flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
    };

    match GraphStore::from_edges(vertex_count, &pairs) {
        Ok(store) => Box::into_raw(Box::new(FfiGraph { store })),
        Err(_) => std::ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn vsssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[repr(C)]
pub struct FfiResult {
    /// One label per vertex, `u32::MAX` for unreachable vertices
    pub labels: *mut u32,
    pub len: size_t,
    pub passes: u32,
    pub converged: c_int,
}

#[no_mangle]
pub extern "C" fn vsssp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).labels.is_null() {
                let labels = std::ptr::slice_from_raw_parts_mut((*res).labels, (*res).len);
                drop(Box::from_raw(labels));
            }
            drop(Box::from_raw(res));
        }
    }
}

/// Runs the relaxation passes. Returns null if `source` is not a vertex.
#[no_mangle]
pub extern "C" fn vsssp_run(
    g: *const FfiGraph,
    source: u32,
    max_passes: u32,
    scheduling: c_int,
) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let store = unsafe { &(*g).store };
    let alg = VertexCentricSssp::new()
        .with_max_passes(max_passes)
        .with_scheduling(scheduling != 0);
    let mut metrics = Metrics::new("sssp");

    match alg.run(store, source, &mut metrics) {
        Ok(summary) => {
            let labels: Box<[u32]> = summary.labels.iter().map(|label| label.get()).collect();
            let len = labels.len();
            let ptr = Box::into_raw(labels) as *mut u32;
            Box::into_raw(Box::new(FfiResult {
                labels: ptr,
                len,
                passes: summary.passes_run,
                converged: summary.converged as c_int,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}
