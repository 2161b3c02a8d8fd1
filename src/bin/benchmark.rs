use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use vertex_sssp::graph::{generators, Graph, GraphStore};
use vertex_sssp::{BfsReference, ShortestPathAlgorithm, VertexCentricSssp};

// Function to generate a random directed graph with specified parameters
fn generate_random_graph(num_vertices: u32, edge_factor: f64, rng: &mut StdRng) -> GraphStore {
    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * num_vertices as f64) as usize;
    let mut edges = generators::random_edge_list(num_vertices - 1, num_edges, rng);

    // Hang the random graph off vertex 0 so the source reaches something
    edges.push((0, 1));

    GraphStore::from_edges(num_vertices as usize, &edges).expect("generated edges are in range")
}

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &GraphStore, source: u32) -> Duration
where
    A: ShortestPathAlgorithm,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: BFS vs vertex-centric relaxation");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let bfs = BfsReference::new();
    let sweep = VertexCentricSssp::new();
    let scheduled = VertexCentricSssp::new().with_scheduling(true);
    let parallel = VertexCentricSssp::new()
        .with_scheduling(true)
        .with_parallel(true)
        .with_window_size(4096);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, &mut rng);
        let source = 0;

        let bfs_time = benchmark_algorithm("BFS", &bfs, &graph, source);
        let sweep_time = benchmark_algorithm("Relaxation (full sweep)", &sweep, &graph, source);
        let scheduled_time = benchmark_algorithm("Relaxation (scheduler)", &scheduled, &graph, source);
        let parallel_time =
            benchmark_algorithm("Relaxation (scheduler, parallel)", &parallel, &graph, source);

        results.push((size, bfs_time, sweep_time, scheduled_time, parallel_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<12} | {:<12} | {:<12}",
        "Vertices", "BFS (ms)", "Sweep (ms)", "Sched (ms)", "Par (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, bfs_time, sweep_time, scheduled_time, parallel_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<12} | {:<12} | {:<12}",
            size,
            bfs_time.as_millis(),
            sweep_time.as_millis(),
            scheduled_time.as_millis(),
            parallel_time.as_millis()
        );
    }
}
