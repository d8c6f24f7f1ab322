//! Text import for weighted graphs
//!
//! Line-oriented edge-list format:
//! - lines containing `strict graph` are header markers and ignored
//! - `<left> -- <right> [weight=<int>]` adds an edge; the bracketed
//!   attribute block is optional and defaults the weight to the configured
//!   value (1 unless overridden)
//! - an edge line with an empty operand is skipped; a malformed weight token
//!   or an unreadable source aborts the whole import
//!
//! Endpoints are created on first mention and reused afterwards, so a label
//! appearing on many lines accumulates edges on one node.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::Config;
use crate::error::{Result, TrellisError};

use super::WeightedGraph;

const HEADER_MARKER: &str = "strict graph";
const EDGE_TOKEN: &str = "--";
const WEIGHT_KEYWORD: &str = "weight";
const WEIGHT_ATTR_PATTERN: &str = r"weight=([^\]]*)\]";

/// Imports a graph from an iterator of text lines.
pub fn import_from_lines<I, S>(lines: I, config: &Config) -> Result<WeightedGraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let weight_attr = match Regex::new(WEIGHT_ATTR_PATTERN) {
        Ok(re) => re,
        Err(e) => return Err(TrellisError::Other(format!("weight pattern: {}", e))),
    };

    let mut graph = WeightedGraph::new();
    let mut skipped = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_no = idx + 1;

        if line.contains(HEADER_MARKER) {
            continue;
        }
        let Some((left, rest)) = line.split_once(EDGE_TOKEN) else {
            continue;
        };

        let left = left.trim();
        let right = rest.split('[').next().unwrap_or("").trim();
        if left.is_empty() || right.is_empty() {
            tracing::debug!(line = line_no, "skipping malformed edge line");
            skipped += 1;
            continue;
        }

        let weight = if line.contains(WEIGHT_KEYWORD) {
            parse_weight(&weight_attr, line, line_no)?
        } else {
            config.default_edge_weight
        };

        graph.add_node(left);
        graph.add_node(right);
        graph.add_edge(left, right, weight)?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped,
        "import complete"
    );
    Ok(graph)
}

/// Imports a graph from a complete text document.
pub fn import_from_str(text: &str, config: &Config) -> Result<WeightedGraph> {
    import_from_lines(text.lines(), config)
}

/// Imports a graph from a file on disk.
///
/// A missing or unreadable file is a fatal import failure; no partially
/// built graph is returned.
#[tracing::instrument(skip(config))]
pub fn import_from_file(path: &Path, config: &Config) -> Result<WeightedGraph> {
    let content = fs::read_to_string(path).map_err(|e| TrellisError::UnreadableSource {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    import_from_str(&content, config)
}

/// Extracts the integer between `weight=` and the next `]`.
fn parse_weight(weight_attr: &Regex, line: &str, line_no: usize) -> Result<u64> {
    let captures =
        weight_attr
            .captures(line)
            .ok_or_else(|| TrellisError::InvalidWeight {
                token: line.trim().to_string(),
                line: line_no,
            })?;

    let token = captures[1].trim();
    token.parse().map_err(|_| TrellisError::InvalidWeight {
        token: token.to_string(),
        line: line_no,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn import(text: &str) -> Result<WeightedGraph> {
        import_from_str(text, &Config::default())
    }

    #[test]
    fn test_round_trip() {
        let graph = import("strict graph {\nA -- B [weight=5]\nB -- C\n}").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.weight("A", "B"), Some(5));
        assert_eq!(graph.weight("B", "A"), Some(5));
        assert_eq!(graph.weight("B", "C"), Some(1));
    }

    #[test]
    fn test_header_line_ignored() {
        // The header marker wins even when the line also carries `--`.
        let graph = import("strict graph G { -- }\nA -- B\n").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_operands_are_trimmed() {
        let graph = import("  A   --   B   [weight=2]").unwrap();
        assert_eq!(graph.weight("A", "B"), Some(2));
    }

    #[test]
    fn test_missing_endpoint_skips_line() {
        let graph = import("A --\n-- B\nA -- C\n").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.weight("A", "C"), Some(1));
    }

    #[test]
    fn test_revisited_label_reuses_node() {
        let graph = import("A -- B\nA -- C\nB -- C\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors("A").unwrap().len(), 2);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_malformed_weight_is_fatal() {
        let err = import("A -- B [weight=abc]").unwrap_err();
        match err {
            TrellisError::InvalidWeight { token, line } => {
                assert_eq!(token, "abc");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_weight_is_fatal() {
        assert!(import("A -- B [weight=-3]").is_err());
    }

    #[test]
    fn test_weight_without_assignment_is_fatal() {
        assert!(import("A -- B [weight]").is_err());
    }

    #[test]
    fn test_duplicate_edge_overwrites_weight() {
        let graph = import("A -- B [weight=5]\nA -- B [weight=9]\n").unwrap();
        assert_eq!(graph.weight("A", "B"), Some(9));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_default_weight_from_config() {
        let config = Config {
            default_edge_weight: 4,
            ..Default::default()
        };
        let graph = import_from_str("A -- B\n", &config).unwrap();
        assert_eq!(graph.weight("A", "B"), Some(4));
    }

    #[test]
    fn test_import_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strict graph {{").unwrap();
        writeln!(file, "  A -- B [weight=5]").unwrap();
        writeln!(file, "  B -- C").unwrap();
        writeln!(file, "}}").unwrap();

        let graph = import_from_file(file.path(), &Config::default()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.weight("A", "B"), Some(5));
        assert_eq!(graph.weight("B", "C"), Some(1));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = import_from_file(Path::new("/no/such/graph.gv"), &Config::default()).unwrap_err();
        assert!(matches!(err, TrellisError::UnreadableSource { .. }));
    }
}
