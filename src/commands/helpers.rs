//! Shared helpers for command implementations

use std::path::Path;

use crate::cli::Cli;
use trellis_core::config::Config;
use trellis_core::error::Result;
use trellis_core::graph::{import, WeightedGraph};

/// Resolve the effective config for this invocation.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    Config::load_or_default(cli.config.as_deref())
}

/// Load config and import the graph file in one step.
pub fn import_graph(cli: &Cli, file: &Path) -> Result<WeightedGraph> {
    let config = resolve_config(cli)?;
    import::import_from_file(file, &config)
}
