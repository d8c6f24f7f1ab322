//! CLI argument parsing for trellis
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use trellis_core::format::OutputFormat;
use trellis_core::graph::algos::Strategy;

/// Trellis - shortest paths and spanning forests over edge-list graph files
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a trellis.toml config file
    #[arg(long, global = true, env = "TRELLIS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a graph file and summarize it
    Load {
        /// Graph file in edge-list format
        file: PathBuf,
    },

    /// Single-source shortest paths
    Path {
        /// Graph file in edge-list format
        file: PathBuf,

        /// Source node label
        #[arg(long)]
        from: String,

        /// Target node label (omit to list every reachable node)
        #[arg(long)]
        to: Option<String>,

        /// Node-selection strategy (scan, heap)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,
    },

    /// Minimum spanning forest of an imported graph
    Mst {
        /// Graph file in edge-list format
        file: PathBuf,
    },

    /// Time both shortest-path strategies against each other
    Bench {
        /// Graph file in edge-list format
        file: PathBuf,

        /// Source node label
        #[arg(long)]
        from: String,

        /// Timed runs per strategy
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        iterations: u32,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: trellis_core::error::TrellisError| e.to_string())
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: trellis_core::error::TrellisError| e.to_string())
}
