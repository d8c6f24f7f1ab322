//! `trellis bench` command - time both shortest-path strategies
//!
//! The core exposes pure computation; all timing lives here. Also
//! cross-checks that the strategies agree before reporting.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::import_graph;
use trellis_core::error::{Result, TrellisError};
use trellis_core::graph::algos::{shortest_path_tree, ShortestPathTree, Strategy};
use trellis_core::graph::WeightedGraph;

#[derive(Debug, Serialize)]
struct StrategyTiming {
    strategy: String,
    iterations: u32,
    total_ms: f64,
    mean_ms: f64,
}

#[derive(Debug, Serialize)]
struct BenchReport {
    file: String,
    from: String,
    nodes: usize,
    edges: usize,
    results: Vec<StrategyTiming>,
    agree: bool,
}

/// Execute the bench command
pub fn execute(cli: &Cli, file: &Path, from: &str, iterations: u32) -> Result<()> {
    let graph = import_graph(cli, file)?;

    let (scan_tree, scan_elapsed) = time_strategy(&graph, from, Strategy::LinearScan, iterations)?;
    let (heap_tree, heap_elapsed) =
        time_strategy(&graph, from, Strategy::PriorityQueue, iterations)?;

    let agree = scan_tree.distances() == heap_tree.distances();
    if !agree {
        // Should be impossible; surfacing it beats silently reporting timings.
        return Err(TrellisError::Other(
            "shortest-path strategies disagree on distances".to_string(),
        ));
    }

    let report = BenchReport {
        file: file.display().to_string(),
        from: from.to_string(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        results: vec![
            timing(Strategy::LinearScan, iterations, scan_elapsed),
            timing(Strategy::PriorityQueue, iterations, heap_elapsed),
        ],
        agree,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            println!(
                "Benchmark: {} ({} nodes, {} edges), {} iterations",
                report.file, report.nodes, report.edges, iterations
            );
            for result in &report.results {
                println!(
                    "  {:>4}: total {:.3} ms, mean {:.3} ms",
                    result.strategy, result.total_ms, result.mean_ms
                );
            }
        }
    }

    Ok(())
}

fn time_strategy(
    graph: &WeightedGraph,
    from: &str,
    strategy: Strategy,
    iterations: u32,
) -> Result<(ShortestPathTree, Duration)> {
    let start = Instant::now();
    let mut tree = shortest_path_tree(graph, from, strategy)?;
    for _ in 1..iterations {
        tree = shortest_path_tree(graph, from, strategy)?;
    }
    Ok((tree, start.elapsed()))
}

fn timing(strategy: Strategy, iterations: u32, elapsed: Duration) -> StrategyTiming {
    let total_ms = elapsed.as_secs_f64() * 1_000.0;
    StrategyTiming {
        strategy: strategy.to_string(),
        iterations,
        total_ms,
        mean_ms: total_ms / f64::from(iterations),
    }
}
