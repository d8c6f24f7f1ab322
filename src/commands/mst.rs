//! `trellis mst` command - minimum spanning forest of an imported graph
//!
//! Labels are mapped to dense indices in sorted-label order, each undirected
//! edge enters the edge list once, and the accepted edges are mapped back to
//! labels for output.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::import_graph;
use trellis_core::error::Result;
use trellis_core::graph::algos::{minimum_spanning_forest, EdgeListGraph};
use trellis_core::graph::WeightedGraph;

#[derive(Debug, Serialize)]
struct MstEdge {
    from: String,
    to: String,
    weight: u64,
}

#[derive(Debug, Serialize)]
struct MstReport {
    file: String,
    vertices: usize,
    edges: Vec<MstEdge>,
    total_weight: u64,
    spanning: bool,
}

/// Execute the mst command
pub fn execute(cli: &Cli, file: &Path, start: Instant) -> Result<()> {
    let graph = import_graph(cli, file)?;
    let labels = graph.labels();

    let forest = minimum_spanning_forest(&to_edge_list(&graph, &labels));

    if cli.verbose {
        eprintln!("mst: {:?}", start.elapsed());
    }

    let report = MstReport {
        file: file.display().to_string(),
        vertices: labels.len(),
        total_weight: forest.total_weight(),
        spanning: forest.is_spanning(),
        edges: forest
            .edges
            .iter()
            .map(|e| MstEdge {
                from: labels[e.src].to_string(),
                to: labels[e.dest].to_string(),
                weight: e.weight,
            })
            .collect(),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            println!("Minimum spanning forest of {}", report.file);
            for edge in &report.edges {
                println!("  {} -- {} [weight={}]", edge.from, edge.to, edge.weight);
            }
            println!("  total weight: {}", report.total_weight);
            if !report.spanning {
                println!("  (input is disconnected; result is a forest)");
            }
        }
    }

    Ok(())
}

/// Each undirected edge enters the list once, in sorted (src, dest) order so
/// weight ties resolve the same way on every run.
fn to_edge_list(graph: &WeightedGraph, labels: &[&str]) -> EdgeListGraph {
    let index: HashMap<&str, usize> = labels
        .iter()
        .enumerate()
        .map(|(i, &label)| (label, i))
        .collect();

    let mut edges = EdgeListGraph::new(labels.len());
    for &label in labels {
        if let Some(neighbors) = graph.neighbors(label) {
            let mut targets: Vec<&str> = neighbors
                .keys()
                .map(String::as_str)
                .filter(|&neighbor| label <= neighbor)
                .collect();
            targets.sort_unstable();

            for neighbor in targets {
                // weight is present for every adjacency entry
                if let Some(weight) = graph.weight(label, neighbor) {
                    edges.add_edge(index[label], index[neighbor], weight);
                }
            }
        }
    }

    edges
}
