use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use vertex_sssp::algorithm::convergence::ConvergenceTracker;
use vertex_sssp::graph::{generators, GraphStore, Label};
use vertex_sssp::{DriverConfig, PassDriver, PassSignal};

const INF: Label = Label::INFINITY;

fn store(vertex_count: usize, edges: &[(u32, u32)]) -> GraphStore {
    GraphStore::from_edges(vertex_count, edges).unwrap()
}

fn labels(raw: &[u32]) -> Vec<Label> {
    raw.iter().map(|&d| Label(d)).collect()
}

fn config(scheduling: bool) -> DriverConfig {
    DriverConfig {
        scheduling,
        ..DriverConfig::default()
    }
}

// 0 -> 1 -> 2 -> 3 advances exactly one hop per pass
#[test]
fn test_path_graph_progression() {
    for scheduling in [false, true] {
        let graph = store(4, &generators::path(4));
        let mut driver = PassDriver::new(&graph, config(scheduling)).unwrap();

        let expected = [
            vec![Label(0), INF, INF, INF],
            vec![Label(0), Label(1), INF, INF],
            vec![Label(0), Label(1), Label(2), INF],
            labels(&[0, 1, 2, 3]),
        ];
        for (pass, want) in expected.iter().enumerate() {
            let report = driver.step();
            assert_eq!(report.pass, pass as u32);
            assert_eq!(&graph.labels(), want, "labels after pass {}", pass);
        }

        // A further pass is a no-op and keeps the flag raised
        let report = driver.step();
        assert_eq!(report.pass, 4);
        assert_eq!(report.edges_lowered, 0);
        assert_eq!(report.edges_published, 0);
        assert_eq!(report.signal, PassSignal::LastPass(4));
        assert_eq!(graph.labels(), labels(&[0, 1, 2, 3]));
    }
}

#[test]
fn test_path_graph_run_stops_early() {
    let graph = store(4, &generators::path(4));
    let mut driver = PassDriver::new(&graph, DriverConfig::default()).unwrap();
    let mut metrics = vertex_sssp::metrics::Metrics::new("sssp");
    let summary = driver.run(&mut metrics);

    assert!(summary.converged);
    // Vertex 3 picks up its distance in pass 3 without writing any edge
    assert_eq!(summary.last_pass, Some(3));
    assert_eq!(summary.passes_run, 4);
    assert_eq!(summary.labels, labels(&[0, 1, 2, 3]));
}

#[test]
fn test_bootstrap_labels() {
    let mut rng = StdRng::seed_from_u64(7);
    let edges = generators::random_edge_list(50, 120, &mut rng);
    let graph = store(51, &edges);
    let mut driver = PassDriver::new(
        &graph,
        DriverConfig {
            source: 17,
            ..DriverConfig::default()
        },
    )
    .unwrap();

    let report = driver.step();
    assert_eq!(report.signal, PassSignal::Continue, "bootstrap is never converged");
    assert_eq!(report.edges_lowered, 0);

    for (v, label) in graph.labels().into_iter().enumerate() {
        if v == 17 {
            assert_eq!(label, Label::ZERO);
        } else {
            assert_eq!(label, INF, "vertex {} after bootstrap", v);
        }
    }
}

// After pass 0 every edge carries its owner's offer; in-edges are never written
#[test]
fn test_bootstrap_writes_out_edges_only() {
    let graph = store(4, &[(0, 1), (1, 2), (2, 0), (3, 0)]);
    let mut driver = PassDriver::new(&graph, DriverConfig::default()).unwrap();
    driver.step();

    for record in graph.edge_records() {
        let owner_offer = graph.label(record.source()).unwrap().offer();
        assert_eq!(record.label(), owner_offer, "edge {} -> {}", record.source(), record.target());
    }
    // The source's in-edges still hold infinity, not the source's offer
    assert_eq!(graph.edge_records()[2].label(), INF);
    assert_eq!(graph.edge_records()[3].label(), INF);
}

// An in-neighbour of the source only hears about it one pass after an
// out-neighbour would, because bootstrap never writes in-edges
#[test]
fn test_in_neighbour_of_source_lags_one_pass() {
    let forward = store(3, &[(0, 1), (1, 2)]);
    let backward = store(3, &[(1, 0), (1, 2)]);

    let mut forward_driver = PassDriver::new(&forward, DriverConfig::default()).unwrap();
    let mut backward_driver = PassDriver::new(&backward, DriverConfig::default()).unwrap();

    forward_driver.step();
    backward_driver.step();
    forward_driver.step();
    backward_driver.step();
    assert_eq!(forward.labels(), vec![Label(0), Label(1), INF]);
    assert_eq!(backward.labels(), vec![Label(0), INF, INF]);

    backward_driver.step();
    backward_driver.step();
    assert_eq!(backward.labels(), labels(&[0, 1, 2]));
}

#[test]
fn test_labels_never_increase() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut edges = generators::random_edge_list(300, 700, &mut rng);
    edges.push((0, 1));
    let graph = store(301, &edges);

    for scheduling in [false, true] {
        graph.reset_labels();
        let mut driver = PassDriver::new(&graph, config(scheduling)).unwrap();
        let mut previous = graph.labels();
        for _ in 0..40 {
            driver.step();
            let current = graph.labels();
            for (v, (before, after)) in previous.iter().zip(&current).enumerate() {
                assert!(after <= before, "vertex {} went from {} to {}", v, before, after);
            }
            previous = current;
        }
    }
}

#[test]
fn test_offer_saturates_at_infinity() {
    assert_eq!(Label::INFINITY.offer(), Label::INFINITY);
    assert_eq!(Label(u32::MAX - 1).offer(), Label::INFINITY);
    assert_eq!(Label(5).offer(), Label(6));
    assert!(Label::INFINITY.offer() >= Label::INFINITY);
    assert_eq!(Label::INFINITY.to_string(), "inf");
}

#[test]
fn test_disconnected_vertices_stay_infinite() {
    // {0, 1} and {2, 3} are separate components, 4 has no edges at all
    let graph = store(5, &[(0, 1), (2, 3), (3, 2)]);
    for scheduling in [false, true] {
        graph.reset_labels();
        let mut driver = PassDriver::new(&graph, config(scheduling)).unwrap();
        let summary = driver.run(&mut vertex_sssp::metrics::Metrics::new("sssp"));

        assert!(summary.converged);
        assert_eq!(summary.labels, vec![Label(0), Label(1), INF, INF, INF]);
    }
}

#[test]
fn test_self_loops_and_parallel_edges() {
    let graph = store(3, &[(0, 0), (0, 1), (0, 1), (1, 1), (1, 2)]);
    let mut driver = PassDriver::new(&graph, config(true)).unwrap();
    let summary = driver.run(&mut vertex_sssp::metrics::Metrics::new("sssp"));

    assert!(summary.converged);
    assert_eq!(summary.labels, labels(&[0, 1, 2]));
    // Both parallel edges were relaxed independently
    assert_eq!(graph.edge_records()[1].label(), Label(1));
    assert_eq!(graph.edge_records()[2].label(), Label(1));
}

#[test]
fn test_edge_labels_settle_on_smaller_offer() {
    let graph = store(6, &generators::grid(3, 2));
    let mut driver = PassDriver::new(&graph, DriverConfig::default()).unwrap();
    driver.run(&mut vertex_sssp::metrics::Metrics::new("sssp"));

    for record in graph.edge_records() {
        let source = graph.label(record.source()).unwrap();
        let target = graph.label(record.target()).unwrap();
        // Both endpoints have offered their final label; the smaller offer wins
        assert_eq!(record.label(), source.min(target).offer());
    }
}

#[test]
fn test_convergence_tracker() {
    let tracker = ConvergenceTracker::new();
    assert!(!tracker.is_converged());

    tracker.begin_pass(0);
    assert!(!tracker.is_converged());

    tracker.begin_pass(1);
    assert!(tracker.is_converged());
    tracker.mark_changed();
    assert!(!tracker.is_converged());

    tracker.begin_pass(2);
    assert!(tracker.is_converged());
    (0..1000).into_par_iter().for_each(|i| {
        if i % 97 == 0 {
            tracker.mark_changed();
        }
    });
    assert!(!tracker.is_converged());
}

// After D relaxation passes on a grid of diameter D the labels are final
#[test]
fn test_grid_reaches_fixed_point_after_diameter_passes() {
    use vertex_sssp::{BfsReference, ShortestPathAlgorithm};

    let (width, height) = (7, 5);
    let graph = store((width * height) as usize, &generators::grid(width, height));
    let expected = BfsReference::new().compute_shortest_paths(&graph, 0).unwrap();
    let diameter = width + height - 2;

    for scheduling in [false, true] {
        graph.reset_labels();
        let mut driver = PassDriver::new(&graph, config(scheduling)).unwrap();
        for _ in 0..=diameter {
            driver.step();
        }
        assert_eq!(graph.labels(), expected.distances);

        let report = driver.step();
        assert_eq!(report.edges_lowered, 0);
        assert_eq!(report.signal, PassSignal::LastPass(diameter + 1));
        assert_eq!(graph.labels(), expected.distances);
    }
}
