use rand::rngs::StdRng;
use rand::SeedableRng;
use vertex_sssp::data_structures::{BitsetScheduler, Scheduler};
use vertex_sssp::graph::{generators, GraphStore};
use vertex_sssp::metrics::Metrics;
use vertex_sssp::{BfsReference, DriverConfig, PassDriver, ShortestPathAlgorithm, VertexCentricSssp};

// Test helper: a random graph whose vertex 0 is attached to the rest
fn random_graph(seed: u64, nodes: u32, edges: usize) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edge_list = generators::random_edge_list(nodes, edges, &mut rng);
    edge_list.push((0, 1));
    GraphStore::from_edges(nodes as usize + 1, &edge_list).unwrap()
}

#[test]
fn test_scheduler_register_and_advance() {
    let scheduler = BitsetScheduler::new(6);
    assert_eq!(scheduler.scheduled_count(), 0);
    scheduler.register_range(0, 5);
    assert_eq!(scheduler.pending_count(), 6);
    scheduler.advance();
    assert_eq!(scheduler.scheduled_count(), 6);
    assert_eq!(scheduler.pending_count(), 0);

    scheduler.deregister_range(1, 3);
    assert!(!scheduler.is_scheduled(2));
    assert_eq!(scheduler.scheduled(0, 5), vec![0, 4, 5]);

    scheduler.register(2);
    scheduler.register_range(4, 10);
    assert!(scheduler.is_pending(2));
    assert!(!scheduler.is_scheduled(2), "registration targets the next pass");

    scheduler.advance();
    assert_eq!(scheduler.scheduled(0, 5), vec![2, 4, 5]);
    assert_eq!(scheduler.pending_count(), 0);

    // Out-of-range requests are ignored
    scheduler.register(99);
    scheduler.deregister_range(7, 9);
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(scheduler.scheduled_count(), 3);
}

#[test]
fn test_scheduler_prunes_path_passes() {
    let graph = GraphStore::from_edges(4, &generators::path(4)).unwrap();
    let mut driver = PassDriver::new(
        &graph,
        DriverConfig {
            scheduling: true,
            ..DriverConfig::default()
        },
    )
    .unwrap();
    let seeded = driver.scheduler().unwrap();
    assert_eq!(seeded.scheduled(0, 3), vec![0, 1, 2, 3], "bootstrap visits every vertex");

    let updates: Vec<usize> = (0..5).map(|_| driver.step().updates).collect();
    assert_eq!(updates, vec![4, 4, 1, 1, 0]);
}

#[test]
fn test_scheduling_matches_full_sweep() {
    for seed in 0..5 {
        let graph = random_graph(seed, 400, 600);
        let sweep = VertexCentricSssp::new()
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        let scheduled = VertexCentricSssp::new()
            .with_scheduling(true)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        let bfs = BfsReference::new().compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(sweep, scheduled, "seed {}", seed);
        assert_eq!(sweep, bfs, "seed {}", seed);
    }
}

// Equivalence must also hold when the pass budget cuts the run short
#[test]
fn test_scheduling_matches_full_sweep_under_budget() {
    let graph = random_graph(3, 500, 550);
    for budget in 1..8 {
        let sweep = VertexCentricSssp::new()
            .with_max_passes(budget)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        let scheduled = VertexCentricSssp::new()
            .with_max_passes(budget)
            .with_scheduling(true)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(sweep, scheduled, "budget {}", budget);
    }
}

#[test]
fn test_parallel_windows_match_sequential() {
    let graph = random_graph(9, 2000, 5000);
    let sequential = VertexCentricSssp::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    for scheduling in [false, true] {
        for window_size in [1, 7, 256, 1 << 20] {
            let parallel = VertexCentricSssp::new()
                .with_scheduling(scheduling)
                .with_parallel(true)
                .with_window_size(window_size)
                .compute_shortest_paths(&graph, 0)
                .unwrap();
            assert_eq!(
                sequential, parallel,
                "scheduling {} window {}",
                scheduling, window_size
            );
        }
    }
}

#[test]
fn test_scheduler_does_fewer_updates() {
    let graph = GraphStore::from_edges(400, &generators::grid(20, 20)).unwrap();

    let mut sweep_metrics = Metrics::new("sweep");
    let mut scheduled_metrics = Metrics::new("scheduled");
    let sweep = VertexCentricSssp::new().run(&graph, 0, &mut sweep_metrics).unwrap();
    let scheduled = VertexCentricSssp::new()
        .with_scheduling(true)
        .run(&graph, 0, &mut scheduled_metrics)
        .unwrap();

    assert_eq!(sweep.labels, scheduled.labels);
    assert!(scheduled_metrics.counter("updates") < sweep_metrics.counter("updates"));
}
