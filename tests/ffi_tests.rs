#![cfg(feature = "ffi")]

use vertex_sssp::ffi::{vsssp_graph_free, vsssp_graph_new, vsssp_result_free, vsssp_run};

#[test]
fn test_ffi_round_trip() {
    let edges: [u32; 6] = [0, 1, 1, 2, 2, 3];
    let graph = vsssp_graph_new(5, edges.as_ptr(), 3);
    assert!(!graph.is_null());

    let result = vsssp_run(graph, 0, 100, 1);
    assert!(!result.is_null());
    unsafe {
        let labels = std::slice::from_raw_parts((*result).labels, (*result).len);
        assert_eq!(labels, &[0, 1, 2, 3, u32::MAX]);
        assert_eq!((*result).converged, 1);
    }
    vsssp_result_free(result);

    assert!(vsssp_run(graph, 9, 100, 0).is_null(), "unknown source");
    vsssp_graph_free(graph);
}

#[test]
fn test_ffi_rejects_out_of_range_edges() {
    let edges: [u32; 2] = [0, 7];
    assert!(vsssp_graph_new(3, edges.as_ptr(), 1).is_null());
}

#[test]
fn test_ffi_rejects_unaddressable_edge_count() {
    let edges: [u32; 2] = [0, 1];
    assert!(vsssp_graph_new(2, edges.as_ptr(), usize::MAX / 2 + 1).is_null());
    assert!(vsssp_graph_new(2, edges.as_ptr(), usize::MAX / 4).is_null());
}
