//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable graph file, malformed weight, unknown label)

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes reported by the trellis binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph file or label (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: scan or heap)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("failed to read graph file {path:?}: {reason}")]
    UnreadableSource { path: PathBuf, reason: String },

    #[error("invalid edge weight {token:?} on line {line}")]
    InvalidWeight { token: String, line: usize },

    #[error("node not found: {label}")]
    NodeNotFound { label: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TrellisError::UnknownFormat(_)
            | TrellisError::UnknownStrategy(_)
            | TrellisError::UsageError(_) => ExitCode::Usage,

            TrellisError::UnreadableSource { .. }
            | TrellisError::InvalidWeight { .. }
            | TrellisError::NodeNotFound { .. }
            | TrellisError::InvalidConfig { .. } => ExitCode::Data,

            TrellisError::Io(_) | TrellisError::Json(_) | TrellisError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::UnknownFormat(_) => "unknown_format",
            TrellisError::UnknownStrategy(_) => "unknown_strategy",
            TrellisError::UsageError(_) => "usage_error",
            TrellisError::UnreadableSource { .. } => "unreadable_source",
            TrellisError::InvalidWeight { .. } => "invalid_weight",
            TrellisError::NodeNotFound { .. } => "node_not_found",
            TrellisError::InvalidConfig { .. } => "invalid_config",
            TrellisError::Io(_) => "io_error",
            TrellisError::Json(_) => "json_error",
            TrellisError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let usage = TrellisError::UnknownFormat("records".to_string());
        assert_eq!(usage.exit_code(), ExitCode::Usage);

        let data = TrellisError::NodeNotFound {
            label: "Z".to_string(),
        };
        assert_eq!(data.exit_code(), ExitCode::Data);

        let failure = TrellisError::Other("boom".to_string());
        assert_eq!(failure.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = TrellisError::InvalidWeight {
            token: "abc".to_string(),
            line: 3,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_weight");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("line 3"));
    }
}
