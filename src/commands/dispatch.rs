//! Command dispatch logic for trellis

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use trellis_core::error::{Result, TrellisError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(TrellisError::UsageError(
            "missing command (see --help)".to_string(),
        )),

        Some(Commands::Load { file }) => commands::load::execute(cli, file, start),

        Some(Commands::Path {
            file,
            from,
            to,
            strategy,
        }) => commands::path::execute(cli, file, from, to.as_deref(), *strategy, start),

        Some(Commands::Mst { file }) => commands::mst::execute(cli, file, start),

        Some(Commands::Bench {
            file,
            from,
            iterations,
        }) => commands::bench::execute(cli, file, from, *iterations),
    }
}
