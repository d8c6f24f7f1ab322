//! Structured logging setup for trellis
//!
//! Logs go to stderr so stdout stays clean for command output. The
//! `TRELLIS_LOG` environment variable overrides whatever the CLI requests.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "trellis=debug",
        (false, None) => "trellis=warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("TRELLIS_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("trellis={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_ansi(false))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
