use rand::Rng;
use std::collections::HashSet;

use crate::graph::types::VertexId;

/// Generates `edges` random directed edges with both endpoints drawn
/// uniformly from `1..=nodes`.
///
/// IDs are 1-based, so vertex 0 exists in the resulting graph but has no edges.
///
/// # Panics
///
/// Panics if `nodes` is 0.
pub fn random_edge_list<R: Rng>(nodes: u32, edges: usize, rng: &mut R) -> Vec<(VertexId, VertexId)> {
    assert!(nodes > 0, "nodes must be positive");
    (0..edges)
        .map(|_| (rng.gen_range(1..=nodes), rng.gen_range(1..=nodes)))
        .collect()
}

/// Generates the directed path 0 -> 1 -> ... -> n-1
pub fn path(n: u32) -> Vec<(VertexId, VertexId)> {
    (1..n).map(|v| (v - 1, v)).collect()
}

/// Generates a 2D grid of `width * height` vertices where every vertex
/// points at its horizontal and vertical neighbours
pub fn grid(width: u32, height: u32) -> Vec<(VertexId, VertexId)> {
    let index = |x: u32, y: u32| -> VertexId { y * width + x };
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                edges.push((current, index(x - 1, y)));
            }
            if x + 1 < width {
                edges.push((current, index(x + 1, y)));
            }
            if y > 0 {
                edges.push((current, index(x, y - 1)));
            }
            if y + 1 < height {
                edges.push((current, index(x, y + 1)));
            }
        }
    }

    edges
}

/// Generates a Barabási-Albert scale-free graph with n vertices and m edges per new vertex
///
/// # Panics
///
/// Panics if `m` is 0 or if `n <= m`.
pub fn barabasi_albert<R: Rng>(n: u32, m: u32, rng: &mut R) -> Vec<(VertexId, VertexId)> {
    assert!(m > 0, "m must be positive");
    assert!(n > m, "n must be greater than m");

    let mut edges = Vec::new();

    // Connect initial vertices (complete graph)
    for i in 0..m {
        for j in 0..m {
            if i != j {
                edges.push((i, j));
            }
        }
    }

    // Vector to track the degree of each vertex for preferential attachment
    let mut degrees = vec![(m - 1) as usize; m as usize];
    let mut total_degree = (m * (m - 1)) as usize;

    for i in m..n {
        let mut added = HashSet::new();

        while added.len() < m as usize {
            let mut target_value = rng.gen_range(0..total_degree.max(1));
            let mut target = 0;

            // Find the target vertex based on cumulative degree
            while target < i && target_value >= degrees[target as usize] {
                target_value -= degrees[target as usize];
                target += 1;
            }

            // Falling off the end means every weight was zero; pick uniformly
            if target >= i {
                target = rng.gen_range(0..i);
            }

            if added.insert(target) {
                edges.push((i, target));
                degrees[target as usize] += 1;
                total_degree += 1;
            }
        }

        degrees.push(m as usize);
        total_degree += m as usize;
    }

    edges
}
