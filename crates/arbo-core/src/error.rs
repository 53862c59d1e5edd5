//! Error types and exit codes for arbo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing graph file, invalid graph, unknown vertex)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the arbo CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph file, invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arbo operations
#[derive(Error, Debug)]
pub enum ArboError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("unsupported graph file extension: {path:?} (expected: .yaml, .yml, .json, or .toml)")]
    UnsupportedExtension { path: PathBuf },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("start vertex not found: {vertex}")]
    StartNotFound { vertex: String },

    #[error("asymmetric adjacency between {from} and {to}: {reason}")]
    AsymmetricEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("negative weight on edge {from} -- {to}: {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("self-loop on vertex: {vertex}")]
    SelfLoop { vertex: String },

    #[error("graph validation failed: {count} violation(s)")]
    InvalidGraph { count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ArboError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            ArboError::UnknownFormat(_)
            | ArboError::DuplicateFormat
            | ArboError::UnsupportedExtension { .. }
            | ArboError::UsageError(_) => ExitCode::Usage,

            // Data errors
            ArboError::GraphNotFound { .. }
            | ArboError::EmptyGraph
            | ArboError::StartNotFound { .. }
            | ArboError::AsymmetricEdge { .. }
            | ArboError::NegativeWeight { .. }
            | ArboError::SelfLoop { .. }
            | ArboError::InvalidGraph { .. } => ExitCode::Data,

            // Generic failures
            ArboError::Io(_)
            | ArboError::Yaml(_)
            | ArboError::Json(_)
            | ArboError::Toml(_)
            | ArboError::Other(_) => ExitCode::Failure,
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

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ArboError::UnknownFormat(_) => "unknown_format",
            ArboError::DuplicateFormat => "duplicate_format",
            ArboError::UnsupportedExtension { .. } => "unsupported_extension",
            ArboError::UsageError(_) => "usage_error",
            ArboError::GraphNotFound { .. } => "graph_not_found",
            ArboError::EmptyGraph => "empty_graph",
            ArboError::StartNotFound { .. } => "start_not_found",
            ArboError::AsymmetricEdge { .. } => "asymmetric_edge",
            ArboError::NegativeWeight { .. } => "negative_weight",
            ArboError::SelfLoop { .. } => "self_loop",
            ArboError::InvalidGraph { .. } => "invalid_graph",
            ArboError::Io(_) => "io_error",
            ArboError::Yaml(_) => "yaml_error",
            ArboError::Json(_) => "json_error",
            ArboError::Toml(_) => "toml_error",
            ArboError::Other(_) => "other",
        }
    }
}

/// Result type alias for arbo operations
pub type Result<T> = std::result::Result<T, ArboError>;
