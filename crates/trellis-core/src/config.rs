//! Configuration for trellis
//!
//! An optional `trellis.toml` (picked up from the working directory, or
//! pointed at explicitly with `--config`) overrides the built-in defaults.
//! A missing fallback file means defaults; an unreadable or unparseable file
//! is an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};
use crate::graph::algos::Strategy;

const CONFIG_FILE: &str = "trellis.toml";

/// Tunable defaults for import and path queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Weight assigned to imported edges without a weight attribute
    #[serde(default = "default_edge_weight")]
    pub default_edge_weight: u64,

    /// Strategy used when a command does not pass `--strategy`
    #[serde(default)]
    pub default_strategy: Strategy,
}

fn default_edge_weight() -> u64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_edge_weight: default_edge_weight(),
            default_strategy: Strategy::default(),
        }
    }
}

impl Config {
    /// Loads from `path` when given, otherwise from `trellis.toml` in the
    /// working directory when present, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TrellisError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| TrellisError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
