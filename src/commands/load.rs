//! `trellis load` command - import a graph file and summarize it

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::import_graph;
use trellis_core::error::Result;

#[derive(Debug, Serialize)]
struct GraphSummary {
    file: String,
    nodes: usize,
    edges: usize,
    total_weight: u64,
}

/// Execute the load command
pub fn execute(cli: &Cli, file: &Path, start: Instant) -> Result<()> {
    let graph = import_graph(cli, file)?;

    if cli.verbose {
        eprintln!("import: {:?}", start.elapsed());
    }

    let summary = GraphSummary {
        file: file.display().to_string(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        total_weight: graph.total_weight(),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Human => {
            println!("Loaded {}", summary.file);
            println!("  nodes: {}", summary.nodes);
            println!("  edges: {}", summary.edges);
            println!("  total weight: {}", summary.total_weight);
        }
    }

    Ok(())
}
