use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{env, process};

use vertex_sssp::graph::{generators, io};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <nodes> <edges> <out-file> [seed]", args[0]);
        process::exit(2);
    }

    let nodes: u32 = parse_or_exit(&args[1], "nodes");
    let edges: usize = parse_or_exit(&args[2], "edges");
    let mut rng = match args.get(4) {
        Some(seed) => StdRng::seed_from_u64(parse_or_exit(seed, "seed")),
        None => StdRng::from_entropy(),
    };

    if nodes == 0 {
        eprintln!("error: nodes must be positive");
        process::exit(2);
    }

    let edge_list = generators::random_edge_list(nodes, edges, &mut rng);
    if let Err(err) = io::write_edge_list(&args[3], &edge_list) {
        eprintln!("error: {err}");
        process::exit(1);
    }
    log::info!("Wrote {} edges over vertices 1..={} to {}", edge_list.len(), nodes, args[3]);
}

fn parse_or_exit<T: std::str::FromStr>(raw: &str, name: &str) -> T {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("error: {name} must be a non-negative integer, got '{raw}'");
        process::exit(2);
    })
}
