//! Graph-definition loading
//!
//! Graph files are plain mappings `vertex -> {neighbor: weight}` in
//! YAML, JSON, or TOML, chosen by file extension. The parsed mapping is
//! validated (symmetry, non-negative weights, no self-loops) before use.

use std::fs;
use std::path::Path;

use crate::error::{ArboError, Result};
use crate::graph::types::Graph;

/// Load and validate a graph definition from `path`.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let graph = load_graph_unchecked(path)?;
    graph.validate()?;
    Ok(graph)
}

/// Load a graph definition without checking structural invariants.
///
/// Used by `check`, which reports every violation rather than failing
/// on the first.
pub fn load_graph_unchecked(path: &Path) -> Result<Graph> {
    if !path.is_file() {
        return Err(ArboError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    let graph: Graph = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => {
            return Err(ArboError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(graph)
}
