use log::{info, warn};
use std::{env, process};

use vertex_sssp::analysis::analyze_labels;
use vertex_sssp::config::RunConfig;
use vertex_sssp::graph::{io, Graph, GraphStore, Label, VertexId};
use vertex_sssp::metrics::Metrics;
use vertex_sssp::{BfsReference, Error, PassDriver, Result, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match RunConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", RunConfig::help());
            process::exit(2);
        }
    };
    if config.help || args.is_empty() {
        println!("{}", RunConfig::help());
        return;
    }

    if let Err(err) = run(&config) {
        eprintln!("sssp failed: {err}");
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let file = config.require_file()?;
    let mut metrics = Metrics::new("sssp");
    metrics.set("file", file.display());

    let labels = if config.onlyresult {
        let path = io::labels_path(file);
        info!("Skipping computation, reading labels from {}", path.display());
        io::read_labels(&path)?
    } else {
        metrics.start_time("preprocessing");
        let graph = io::read_edge_list(file)?.into_store()?;
        metrics.stop_time("preprocessing");
        metrics.set("vertices", graph.vertex_count());
        metrics.set("edges", graph.edge_count());

        let mut driver = PassDriver::new(&graph, config.driver_config())?;
        let summary = driver.run(&mut metrics);
        metrics.set("converged", summary.converged);

        if config.verify {
            metrics.start_time("verify");
            verify(&graph, config.source, &summary.labels, summary.converged)?;
            metrics.stop_time("verify");
        }

        let path = io::labels_path(file);
        io::write_labels(&path, &summary.labels)?;
        info!("Wrote {} labels to {}", summary.labels.len(), path.display());
        summary.labels
    };

    metrics.start_time("label-analysis");
    let analysis = analyze_labels(&labels);
    analysis.write_report(io::analysis_path(file))?;
    metrics.stop_time("label-analysis");

    println!("{}", analysis.summary());
    for (distance, count) in analysis.top_distances(20) {
        println!("  distance {distance}: {count} vertices");
    }
    println!("{}", metrics.to_json()?);
    Ok(())
}

fn verify(graph: &GraphStore, source: VertexId, labels: &[Label], converged: bool) -> Result<()> {
    let expected = BfsReference::new().compute_shortest_paths(graph, source)?;
    let mismatches = expected
        .distances
        .iter()
        .zip(labels)
        .filter(|(want, got)| want != got)
        .count();

    if mismatches == 0 {
        info!("Verified {} labels against BFS", labels.len());
        Ok(())
    } else if converged {
        Err(Error::AlgorithmError(format!(
            "{} of {} labels differ from BFS",
            mismatches,
            labels.len()
        )))
    } else {
        warn!(
            "{} of {} labels differ from BFS; the pass budget ran out before convergence",
            mismatches,
            labels.len()
        );
        Ok(())
    }
}
