//! `trellis path` command - single-source shortest paths
//!
//! With `--to` prints one reconstructed path; without it, every finite
//! distance in label order plus the unreachable remainder.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::resolve_config;
use trellis_core::error::{Result, TrellisError};
use trellis_core::graph::algos::{shortest_path_tree, ShortestPathTree, Strategy};
use trellis_core::graph::import;
use trellis_core::graph::WeightedGraph;

#[derive(Debug, Serialize)]
struct PathReport {
    from: String,
    to: String,
    strategy: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<u64>,
    path: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DistanceEntry {
    label: String,
    distance: u64,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    from: String,
    strategy: String,
    reachable: Vec<DistanceEntry>,
    unreachable: Vec<String>,
}

/// Execute the path command
pub fn execute(
    cli: &Cli,
    file: &Path,
    from: &str,
    to: Option<&str>,
    strategy: Option<Strategy>,
    start: Instant,
) -> Result<()> {
    let config = resolve_config(cli)?;
    let graph = import::import_from_file(file, &config)?;
    let strategy = strategy.unwrap_or(config.default_strategy);

    if let Some(target) = to {
        // A typo'd label is a data error; an unreachable one is a result.
        if !graph.contains_node(target) {
            return Err(TrellisError::NodeNotFound {
                label: target.to_string(),
            });
        }
    }

    let tree = shortest_path_tree(&graph, from, strategy)?;

    if cli.verbose {
        eprintln!("shortest_path ({}): {:?}", strategy, start.elapsed());
    }

    match to {
        Some(target) => report_single(cli, &tree, target, strategy),
        None => report_all(cli, &graph, &tree, strategy),
    }
}

fn report_single(cli: &Cli, tree: &ShortestPathTree, target: &str, strategy: Strategy) -> Result<()> {
    let path = tree.path_to(target).unwrap_or_default();
    let report = PathReport {
        from: tree.source().to_string(),
        to: target.to_string(),
        strategy: strategy.to_string(),
        found: !path.is_empty(),
        distance: tree.distance(target),
        path,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            if report.found {
                println!("{}", report.path.join(" -> "));
                // distance is always present when a path was found
                if let Some(distance) = report.distance {
                    println!("  distance: {}", distance);
                }
            } else {
                println!("no path from {} to {}", report.from, report.to);
            }
        }
    }

    Ok(())
}

fn report_all(
    cli: &Cli,
    graph: &WeightedGraph,
    tree: &ShortestPathTree,
    strategy: Strategy,
) -> Result<()> {
    let reachable: Vec<DistanceEntry> = tree
        .reachable()
        .into_iter()
        .map(|label| DistanceEntry {
            label: label.to_string(),
            // reachable() only yields labels with a finite distance
            distance: tree.distance(label).unwrap_or_default(),
        })
        .collect();

    let unreachable: Vec<String> = graph
        .labels()
        .into_iter()
        .filter(|label| tree.distance(label).is_none())
        .map(str::to_string)
        .collect();

    let report = DistanceReport {
        from: tree.source().to_string(),
        strategy: strategy.to_string(),
        reachable,
        unreachable,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            println!("Distances from {}", report.from);
            for entry in &report.reachable {
                println!("  {}: {}", entry.label, entry.distance);
            }
            for label in &report.unreachable {
                println!("  {}: unreachable", label);
            }
        }
    }

    Ok(())
}
