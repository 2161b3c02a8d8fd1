use colored::*;

use vertex_sssp::graph::{generators, GraphStore, Label};
use vertex_sssp::{DriverConfig, PassDriver, PassSignal};

fn render(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| {
            if label.is_reachable() {
                format!("{:>4}", label).green().to_string()
            } else {
                format!("{:>4}", label).dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    env_logger::init();

    let n = 8;
    let graph = GraphStore::from_edges(n as usize, &generators::path(n)).unwrap();

    for scheduling in [false, true] {
        graph.reset_labels();
        let config = DriverConfig {
            scheduling,
            ..DriverConfig::default()
        };
        let mut driver = PassDriver::new(&graph, config).unwrap();

        println!(
            "\n{}",
            format!("Path 0 -> ... -> {} (scheduler {})", n - 1, scheduling)
                .yellow()
                .bold()
        );
        loop {
            let report = driver.step();
            println!(
                "pass {:>2} | {} | {:>2} updates, {} edges lowered",
                report.pass,
                render(&graph.labels()),
                report.updates,
                report.edges_lowered
            );
            if let PassSignal::LastPass(pass) = report.signal {
                println!("{}", format!("converged after pass {}", pass).cyan());
                break;
            }
        }
    }
}
